//! Logging for the dualpath library and CLI.
//!
//! The grammars only emit records through the `log` facade: cwd lookups,
//! drive directory fallbacks and roots that `relative` cannot bridge. A
//! [`Logger`] prints those records, and the CLI's own diagnostics, on stderr
//! filtered by a [`LogLevel`].

use std::env;

/// Environment variable read by [`init_logger`].
pub const LOG_MODE_ENV: &str = "DUALPATH_LOG_MODE";

/// How much diagnostic output reaches stderr.
///
/// Levels are ordered from least verbose (Quiet) to most verbose (Verbose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including cwd resolution details.
    Verbose,
}

impl LogLevel {
    /// Parse `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns the rejected text for any other value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("Verbose"), Ok(LogLevel::Verbose));
    /// assert!(LogLevel::parse("trace").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` facade filter matching this level.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Trace,
        }
    }
}

/// A stderr logger.
///
/// # Examples
///
/// ```
/// use dualpath::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Verbose);
/// logger.debug("resolving \"d:saves\" against D:\\games");
/// logger.warn("drive directory C:\\work is not on d:, using d:\\");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// A logger printing messages allowed by `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Print a warning unless quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Print an informational message when verbose.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Print a debug message when verbose.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }

    fn emit(&self, needs: LogLevel, tag: &str, message: &str) {
        if self.level >= needs {
            eprintln!("{tag}: {message}");
        }
    }

    /// Install this logger as the sink of the `log` facade.
    ///
    /// # Errors
    ///
    /// Returns an error if a logger has already been installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.emit(LogLevel::Normal, "ERROR", &message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

/// Pick the log level for a run.
///
/// `--verbose` wins over `--quiet`, and either flag wins over
/// `DUALPATH_LOG_MODE`. An unset or unrecognized variable means Normal.
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| LogLevel::parse(&mode).ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    fn with_log_mode<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(value) => env::set_var(LOG_MODE_ENV, value),
            None => env::remove_var(LOG_MODE_ENV),
        }
        let result = f();
        match saved {
            Some(value) => env::set_var(LOG_MODE_ENV, value),
            None => env::remove_var(LOG_MODE_ENV),
        }
        result
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("QUIET"), Ok(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("normal"), Ok(LogLevel::Normal));
        assert!(LogLevel::parse("").is_err());
        assert!(LogLevel::Quiet < LogLevel::Verbose);
    }

    #[test]
    fn test_facade_filter() {
        let debug = log::Metadata::builder().level(log::Level::Debug).build();
        let warn = log::Metadata::builder().level(log::Level::Warn).build();

        assert!(Logger::new(LogLevel::Verbose).enabled(&debug));
        assert!(!Logger::new(LogLevel::Normal).enabled(&debug));
        assert!(Logger::new(LogLevel::Normal).enabled(&warn));
        assert!(!Logger::new(LogLevel::Quiet).enabled(&warn));
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
            assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
            assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_env_fallbacks() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
            assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
        });
        with_log_mode(Some("chatty"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
        with_log_mode(Some("Verbose"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Verbose);
        });
    }
}
