//! Path grammars.
//!
//! A grammar is a set of pure string transformations over one family of path
//! syntax. Two grammars are provided:
//!
//! - [`Posix`]: `/` separates segments, a leading `/` is the only root.
//! - [`Windows`]: `\` and `/` both separate segments; roots may be a drive
//!   (`C:`), a drive root (`C:\`), a bare separator, or a UNC share
//!   (`\\server\share\`).
//!
//! Both are independent of the host platform. [`NativePath`] and [`native`]
//! select the one matching the host, and [`GrammarKind`] selects one at
//! runtime.
//!
//! # Examples
//!
//! ```
//! use dualpath::{GrammarKind, PathGrammar, Posix, Windows};
//!
//! assert_eq!(Posix::new().basename("/foo/bar/baz/asdf/quux.html", None), "quux.html");
//! assert_eq!(Windows::new().basename("C:\\foo.html", Some(".html")), "foo");
//!
//! let kind: GrammarKind = "win32".parse().unwrap();
//! assert_eq!(kind, GrammarKind::Windows);
//! ```

mod dots;
pub mod posix;
mod scan;
pub mod windows;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::env;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::components::{value_kind, PathComponents};
use crate::error::{Error, Result};

pub use posix::Posix;
pub use windows::Windows;

/// Environment variable naming the grammar for [`GrammarKind::from_env`].
pub const GRAMMAR_ENV: &str = "DUALPATH_GRAMMAR";

/// The operations every path grammar provides.
///
/// All operations are total over strings: they never fail and never touch the
/// filesystem. `resolve` and the operations built on it (`relative`,
/// `to_namespaced_path`) read the working directory from the grammar's
/// [`CwdProvider`](crate::CwdProvider).
///
/// The `*_value` methods accept loosely typed JSON values, for callers that
/// receive arguments from an untyped source.
pub trait PathGrammar {
    /// The separator this grammar emits.
    fn separator(&self) -> char;

    /// The delimiter used between entries of a `PATH`-style list.
    fn delimiter(&self) -> char;

    /// Whether `path` is absolute under this grammar.
    fn is_absolute(&self, path: &str) -> bool;

    /// The last portion of `path`, ignoring trailing separators.
    ///
    /// When `ext` is given and the result ends with it, the suffix is removed,
    /// unless the suffix is the whole result.
    fn basename(&self, path: &str, ext: Option<&str>) -> String;

    /// Everything before the last segment of `path`, ignoring trailing
    /// separators. Returns `"."` when there is no directory portion.
    fn dirname(&self, path: &str) -> String;

    /// The extension of the last segment, from its last `.` to the end.
    ///
    /// Returns `""` when the segment has no `.`, or its only `.` is the first
    /// character (dotfiles).
    fn extname(&self, path: &str) -> String;

    /// Join all non-empty segments with the separator and normalize the
    /// result. Returns `"."` when nothing non-empty remains.
    fn join<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Collapse separators and `.`/`..` segments, keeping a trailing separator.
    fn normalize(&self, path: &str) -> String;

    /// Split `path` into its root, directory, base, name and extension.
    fn parse(&self, path: &str) -> PathComponents;

    /// Assemble a path from components; the inverse of [`parse`](Self::parse).
    ///
    /// `dir` falls back to `root`, and `base` falls back to `name + ext`.
    /// When the directory is exactly the root no separator is inserted.
    fn format(&self, components: &PathComponents) -> String {
        let dir = if components.dir.is_empty() {
            components.root.as_str()
        } else {
            components.dir.as_str()
        };
        let base = if components.base.is_empty() {
            format!("{}{}", components.name, components.ext)
        } else {
            components.base.clone()
        };

        if dir.is_empty() {
            base
        } else if dir == components.root {
            format!("{dir}{base}")
        } else {
            format!("{dir}{}{base}", self.separator())
        }
    }

    /// The path that leads from `from` to `to`, both resolved first.
    ///
    /// Returns `""` when both resolve to the same path.
    fn relative(&self, from: &str, to: &str) -> String;

    /// Resolve a sequence of segments, right to left, into an absolute path.
    ///
    /// Processing stops at the first segment that makes the result absolute;
    /// the working directory is used when the segments run out first.
    fn resolve<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// The namespace-prefixed form of `path`, where the grammar has one.
    fn to_namespaced_path(&self, path: &str) -> String;

    /// [`join`](Self::join) over loosely typed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any element is not a string.
    fn join_values(&self, paths: &[Value]) -> Result<String> {
        Ok(self.join(strings("join", paths)?))
    }

    /// [`resolve`](Self::resolve) over loosely typed values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if any element is not a string.
    fn resolve_values(&self, paths: &[Value]) -> Result<String> {
        Ok(self.resolve(strings("resolve", paths)?))
    }

    /// [`format`](Self::format) over a loosely typed value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the value is not an object of
    /// string fields, and [`Error::UnknownField`] for an unknown key.
    fn format_value(&self, components: &Value) -> Result<String> {
        let components = PathComponents::from_value(components)?;
        Ok(self.format(&components))
    }

    /// [`to_namespaced_path`](Self::to_namespaced_path) over a loosely typed
    /// value. Anything other than a string is returned unchanged.
    fn to_namespaced_value(&self, path: &Value) -> Value {
        match path {
            Value::String(path) => Value::String(self.to_namespaced_path(path)),
            other => other.clone(),
        }
    }
}

fn strings<'a>(operation: &'static str, values: &'a [Value]) -> Result<Vec<&'a str>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value.as_str().ok_or_else(|| {
                Error::invalid_argument(
                    operation,
                    format!(
                        "all paths must be strings, found {} at position {index}",
                        value_kind(value)
                    ),
                )
            })
        })
        .collect()
}

/// The grammar of the host platform.
#[cfg(windows)]
pub type NativePath = Windows;

/// The grammar of the host platform.
#[cfg(not(windows))]
pub type NativePath = Posix;

/// The host grammar, reading the process working directory.
#[must_use]
pub fn native() -> NativePath {
    NativePath::new()
}

/// Selects one of the two grammars at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarKind {
    /// The POSIX grammar.
    Posix,
    /// The Windows grammar.
    Windows,
}

impl GrammarKind {
    /// The grammar of the host platform.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Parse a grammar name: `posix`, `windows` (or `win32`), or `native`.
    /// Matching ignores case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGrammar`] for any other name.
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" | "win32" => Ok(Self::Windows),
            "native" => Ok(Self::native()),
            _ => Err(Error::UnknownGrammar {
                value: value.to_string(),
            }),
        }
    }

    /// Read the grammar from `DUALPATH_GRAMMAR`, defaulting to the host grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGrammar`] if the variable holds an unknown name.
    pub fn from_env() -> Result<Self> {
        match env::var(GRAMMAR_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::parse(&value),
            _ => Ok(Self::native()),
        }
    }

    /// The canonical name of this grammar.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
        }
    }
}

impl Default for GrammarKind {
    fn default() -> Self {
        Self::native()
    }
}

impl FromStr for GrammarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
