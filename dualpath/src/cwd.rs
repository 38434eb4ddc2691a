//! Working directory sources.
//!
//! `resolve` (and everything built on it: `relative`, `to_namespaced_path`)
//! falls back to the current working directory once its arguments run out.
//! That directory is read through [`CwdProvider`] so the grammars stay
//! deterministic under test and can be pointed at an arbitrary directory.

use std::collections::BTreeMap;
use std::env;

/// A source of working directories.
///
/// # Examples
///
/// ```
/// use dualpath::{CwdProvider, FixedCwd};
///
/// let cwd = FixedCwd::new("C:\\work").with_drive("D:", "D:\\games");
/// assert_eq!(cwd.current_dir().as_deref(), Some("C:\\work"));
/// assert_eq!(cwd.drive_dir("d:").as_deref(), Some("D:\\games"));
/// assert_eq!(cwd.drive_dir("E:"), None);
/// ```
pub trait CwdProvider {
    /// The process working directory, or `None` if it cannot be determined.
    fn current_dir(&self) -> Option<String>;

    /// The working directory remembered for a Windows drive such as `C:`.
    ///
    /// Windows keeps one working directory per drive; a drive-relative path
    /// like `C:foo` resolves against it. Sources without that notion return
    /// `None`, and resolution falls back to the process working directory.
    fn drive_dir(&self, drive: &str) -> Option<String> {
        let _ = drive;
        None
    }
}

impl<T: CwdProvider + ?Sized> CwdProvider for &T {
    fn current_dir(&self) -> Option<String> {
        (**self).current_dir()
    }

    fn drive_dir(&self, drive: &str) -> Option<String> {
        (**self).drive_dir(drive)
    }
}

/// Reads the working directory of the running process.
///
/// Drive directories come from the `=C:`-style environment variables that
/// Windows shells maintain. Those variables cannot exist on other hosts, so
/// there the lookup always comes back empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsCwd;

impl CwdProvider for OsCwd {
    fn current_dir(&self) -> Option<String> {
        match env::current_dir() {
            Ok(dir) => Some(dir.to_string_lossy().into_owned()),
            Err(e) => {
                log::debug!("cannot read process working directory: {e}");
                None
            }
        }
    }

    fn drive_dir(&self, drive: &str) -> Option<String> {
        if !cfg!(windows) {
            return None;
        }
        env::var_os(format!("={drive}")).map(|dir| dir.to_string_lossy().into_owned())
    }
}

/// A fixed working directory, with optional per-drive directories.
///
/// Drive keys are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedCwd {
    current: Option<String>,
    drives: BTreeMap<String, String>,
}

impl FixedCwd {
    /// Create a provider that always reports `current` as the working directory.
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: Some(current.into()),
            drives: BTreeMap::new(),
        }
    }

    /// Create a provider that reports no working directory at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualpath::{FixedCwd, PathGrammar, Posix};
    ///
    /// let posix = Posix::with_cwd(FixedCwd::unavailable());
    /// assert_eq!(posix.resolve(["a/b", "../c"]), "a/c");
    /// ```
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Remember `dir` as the working directory of `drive` (e.g. `"C:"`).
    #[must_use]
    pub fn with_drive(mut self, drive: impl AsRef<str>, dir: impl Into<String>) -> Self {
        self.drives
            .insert(drive.as_ref().to_ascii_lowercase(), dir.into());
        self
    }
}

impl CwdProvider for FixedCwd {
    fn current_dir(&self) -> Option<String> {
        self.current.clone()
    }

    fn drive_dir(&self, drive: &str) -> Option<String> {
        self.drives.get(&drive.to_ascii_lowercase()).cloned()
    }
}
