//! Common test utilities for CLI integration tests.
//!
//! Every command built here starts from a clean environment: the
//! `DUALPATH_*` variables of the surrounding shell are removed so the
//! grammar and working directory come only from the test itself.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Working directory pinned for POSIX runs.
#[allow(dead_code)]
pub const POSIX_CWD: &str = "/home/tester/work";

/// Working directory pinned for Windows runs.
#[allow(dead_code)]
pub const WINDOWS_CWD: &str = "C:\\Users\\tester\\work";

/// A `dualpath` command with no `DUALPATH_*` variables set.
pub fn bare() -> Command {
    let mut cmd = Command::cargo_bin("dualpath").expect("Failed to find dualpath binary");
    cmd.env_remove("DUALPATH_GRAMMAR")
        .env_remove("DUALPATH_CWD")
        .env_remove("DUALPATH_LOG_MODE");
    cmd
}

/// A `dualpath` command using the POSIX grammar and [`POSIX_CWD`].
#[allow(dead_code)]
pub fn posix() -> Command {
    let mut cmd = bare();
    cmd.args(["--grammar", "posix", "--cwd", POSIX_CWD]);
    cmd
}

/// A `dualpath` command using the Windows grammar and [`WINDOWS_CWD`].
#[allow(dead_code)]
pub fn windows() -> Command {
    let mut cmd = bare();
    cmd.args(["--grammar", "windows", "--cwd", WINDOWS_CWD]);
    cmd
}

/// A scratch directory to run the binary in.
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The directory as the process sees it once it has changed into it.
    pub fn canonical_path(&self) -> PathBuf {
        self.path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir")
    }

    /// A `dualpath` command running inside the scratch directory.
    pub fn command(&self) -> Command {
        let mut cmd = bare();
        cmd.current_dir(self.path());
        cmd
    }
}
