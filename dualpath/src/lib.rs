#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dualpath
//!
//! POSIX and Windows path grammars implemented as pure string transformations.
//!
//! Both grammars split, join, normalize, resolve and compare path strings
//! without touching the filesystem. The only environment input is the current
//! working directory, which is read through an injectable [`CwdProvider`].
//!
//! ## Core Types
//!
//! - [`Posix`] and [`Windows`]: the two grammars, both implementing [`PathGrammar`]
//! - [`PathComponents`]: the five named parts of a parsed path
//! - [`CwdProvider`], [`OsCwd`] and [`FixedCwd`]: working directory sources
//! - [`GrammarKind`] and [`NativePath`]: host grammar selection
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dualpath::{PathGrammar, Posix, Windows};
//!
//! let posix = Posix::new();
//! assert_eq!(posix.normalize("/foo/../../../bar"), "/bar");
//! assert_eq!(posix.join(["a", "../b"]), "b");
//! assert_eq!(posix.relative("/var/lib", "/bin"), "../../bin");
//!
//! let windows = Windows::new();
//! assert_eq!(windows.normalize("C:..\\..\\abc\\..\\def"), "C:..\\..\\def");
//! assert_eq!(windows.join(["//foo", "bar"]), "\\\\foo\\bar\\");
//! assert_eq!(windows.to_namespaced_path("C:\\foo"), "\\\\?\\C:\\foo");
//! ```

pub mod chars;
pub mod components;
pub mod cwd;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod text;

// Re-export key types at crate root for convenience
pub use components::PathComponents;
pub use cwd::{CwdProvider, FixedCwd, OsCwd};
pub use error::{Error, Result};
pub use grammar::{native, GrammarKind, NativePath, PathGrammar, Posix, Windows};
pub use logging::{init_logger, LogLevel, Logger};
