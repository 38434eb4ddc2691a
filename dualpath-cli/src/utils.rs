//! Utility functions for CLI operations.
//!
//! This module holds the options shared by every command and builds the
//! working directory source the grammars resolve against.

use dualpath::{CwdProvider, FixedCwd, GrammarKind, Logger, OsCwd};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Diagnostics sink for the current verbosity.
    pub logger: Logger,

    /// The grammar to apply.
    pub grammar: GrammarKind,

    /// Working directory override.
    pub cwd: Option<String>,

    /// Per-drive working directories for the Windows grammar.
    pub drive_cwds: Vec<DriveCwd>,
}

/// A `DRIVE=DIR` pair such as `D:=D:\games`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveCwd {
    /// The drive, a letter followed by a colon.
    pub drive: String,
    /// The working directory of that drive.
    pub dir: String,
}

impl FromStr for DriveCwd {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (drive, dir) = s
            .split_once('=')
            .ok_or_else(|| format!("expected DRIVE=DIR, got '{s}'"))?;
        let bytes = drive.as_bytes();
        if bytes.len() != 2 || !bytes[0].is_ascii_alphabetic() || bytes[1] != b':' {
            return Err(format!("'{drive}' is not a drive such as C:"));
        }
        if dir.is_empty() {
            return Err(format!("no directory given for drive {drive}"));
        }
        Ok(Self {
            drive: drive.to_string(),
            dir: dir.to_string(),
        })
    }
}

impl fmt::Display for DriveCwd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.drive, self.dir)
    }
}

/// The working directory source the CLI hands to the grammars.
///
/// `current_dir` is a value fixed for the whole invocation. Drive lookups
/// try the `--drive-cwd` entries first and then the fallback provider, which
/// is the host's own drive table by default.
#[derive(Debug, Clone)]
pub struct CliCwd<F = OsCwd> {
    pinned: FixedCwd,
    fallback: F,
}

impl<F: CwdProvider> CliCwd<F> {
    /// Wrap `pinned`, consulting `fallback` for drives it does not know.
    pub fn new(pinned: FixedCwd, fallback: F) -> Self {
        Self { pinned, fallback }
    }
}

impl<F: CwdProvider> CwdProvider for CliCwd<F> {
    fn current_dir(&self) -> Option<String> {
        self.pinned.current_dir()
    }

    fn drive_dir(&self, drive: &str) -> Option<String> {
        self.pinned
            .drive_dir(drive)
            .or_else(|| self.fallback.drive_dir(drive))
    }
}

/// Build the working directory source for one invocation.
///
/// An explicit `--cwd` wins; otherwise the process working directory is
/// read once, so every operation of the command sees the same value. If it
/// cannot be read, the grammars run without one.
pub fn working_dir(global: &GlobalOptions) -> CliCwd {
    let current = match global.cwd.as_deref() {
        Some(dir) if !dir.is_empty() => Some(dir.to_string()),
        _ => match env::current_dir() {
            Ok(dir) => Some(dir.to_string_lossy().into_owned()),
            Err(e) => {
                global
                    .logger
                    .debug(&format!("cannot read process working directory: {e}"));
                None
            }
        },
    };

    let base = match current {
        Some(dir) => {
            global.logger.debug(&format!("working directory: {dir}"));
            FixedCwd::new(dir)
        }
        None => FixedCwd::unavailable(),
    };
    let pinned = global.drive_cwds.iter().fold(base, |cwd, entry| {
        global.logger.debug(&format!("drive directory: {entry}"));
        cwd.with_drive(&entry.drive, entry.dir.clone())
    });
    CliCwd::new(pinned, OsCwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dualpath::LogLevel;

    fn global(cwd: Option<&str>, drive_cwds: Vec<DriveCwd>) -> GlobalOptions {
        GlobalOptions {
            logger: Logger::new(LogLevel::Quiet),
            grammar: GrammarKind::Windows,
            cwd: cwd.map(str::to_string),
            drive_cwds,
        }
    }

    #[test]
    fn test_drive_cwd_parse() {
        let entry: DriveCwd = "D:=D:\\games".parse().unwrap();
        assert_eq!(entry.drive, "D:");
        assert_eq!(entry.dir, "D:\\games");
        assert_eq!(entry.to_string(), "D:=D:\\games");
    }

    #[test]
    fn test_drive_cwd_keeps_later_equals_signs() {
        let entry: DriveCwd = "e:=E:\\a=b".parse().unwrap();
        assert_eq!(entry.drive, "e:");
        assert_eq!(entry.dir, "E:\\a=b");
    }

    #[test]
    fn test_drive_cwd_rejects_malformed() {
        assert!("D:\\games".parse::<DriveCwd>().is_err());
        assert!("DD:=x".parse::<DriveCwd>().is_err());
        assert!("1:=x".parse::<DriveCwd>().is_err());
        assert!("D=x".parse::<DriveCwd>().is_err());
        assert!("D:=".parse::<DriveCwd>().is_err());
    }

    #[test]
    fn test_working_dir_override() {
        let drives = vec!["D:=D:\\games".parse().unwrap()];
        let cwd = working_dir(&global(Some("C:\\work"), drives));
        assert_eq!(cwd.current_dir().as_deref(), Some("C:\\work"));
        assert_eq!(cwd.drive_dir("d:").as_deref(), Some("D:\\games"));
    }

    #[test]
    fn test_working_dir_snapshots_process() {
        let expected = env::current_dir().unwrap();
        for cwd in [None, Some("")] {
            let snapshot = working_dir(&global(cwd, Vec::new()));
            assert_eq!(
                snapshot.current_dir().as_deref(),
                Some(expected.to_string_lossy().as_ref())
            );
        }
    }

    #[test]
    fn test_drive_lookup_falls_back() {
        let shell = FixedCwd::unavailable()
            .with_drive("D:", "D:\\from\\shell")
            .with_drive("E:", "E:\\other");
        let pinned = FixedCwd::new("C:\\work").with_drive("E:", "E:\\flag");
        let cwd = CliCwd::new(pinned, shell);

        assert_eq!(cwd.current_dir().as_deref(), Some("C:\\work"));
        assert_eq!(cwd.drive_dir("d:").as_deref(), Some("D:\\from\\shell"));
        assert_eq!(cwd.drive_dir("e:").as_deref(), Some("E:\\flag"));
        assert_eq!(cwd.drive_dir("F:"), None);
    }

    #[test]
    fn test_windows_resolve_reads_fallback_drive() {
        use dualpath::{PathGrammar, Windows};

        let shell = FixedCwd::unavailable().with_drive("D:", "D:\\games");
        let grammar = Windows::with_cwd(CliCwd::new(FixedCwd::new("C:\\work"), shell));
        assert_eq!(grammar.resolve(["d:saves"]), "d:\\games\\saves");
    }

    #[test]
    #[cfg(not(windows))]
    fn test_os_fallback_has_no_drives_off_windows() {
        let cwd = working_dir(&global(Some("/srv"), Vec::new()));
        assert_eq!(cwd.drive_dir("C:"), None);
    }
}
