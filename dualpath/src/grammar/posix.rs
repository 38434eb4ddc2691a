//! The POSIX path grammar.

use crate::chars::{is_posix_separator, PosixSeparators, CHAR_FORWARD_SLASH};
use crate::components::PathComponents;
use crate::cwd::{CwdProvider, OsCwd};
use crate::text::{range, tail};

use super::dots::normalize_string;
use super::scan::{self, TailScan};
use super::PathGrammar;

/// POSIX path syntax: `/` separates segments and a leading `/` is the root.
///
/// # Examples
///
/// ```
/// use dualpath::{FixedCwd, PathGrammar, Posix};
///
/// let posix = Posix::with_cwd(FixedCwd::new("/home/user"));
/// assert_eq!(posix.resolve(["project", "../notes"]), "/home/user/notes");
/// assert_eq!(posix.dirname("/a/b/"), "/a");
/// assert_eq!(posix.extname("archive.tar.gz"), ".gz");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Posix<C = OsCwd> {
    cwd: C,
}

impl Posix<OsCwd> {
    /// A POSIX grammar reading the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self { cwd: OsCwd }
    }
}

impl<C: CwdProvider> Posix<C> {
    /// A POSIX grammar reading the working directory from `cwd`.
    #[must_use]
    pub fn with_cwd(cwd: C) -> Self {
        Self { cwd }
    }

    /// The working directory source.
    pub fn cwd(&self) -> &C {
        &self.cwd
    }
}

impl<C: CwdProvider> PathGrammar for Posix<C> {
    fn separator(&self) -> char {
        '/'
    }

    fn delimiter(&self) -> char {
        ':'
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.as_bytes().first() == Some(&CHAR_FORWARD_SLASH)
    }

    fn basename(&self, path: &str, ext: Option<&str>) -> String {
        scan::basename::<PosixSeparators>(path, ext, 0)
    }

    fn dirname(&self, path: &str) -> String {
        let bytes = path.as_bytes();
        if bytes.is_empty() {
            return ".".to_string();
        }
        let has_root = self.is_absolute(path);
        let mut end = None;
        let mut matched_slash = true;
        for i in (1..bytes.len()).rev() {
            if is_posix_separator(bytes[i]) {
                if !matched_slash {
                    end = Some(i);
                    break;
                }
            } else {
                matched_slash = false;
            }
        }

        match end {
            None if has_root => "/".to_string(),
            None => ".".to_string(),
            Some(1) if has_root => "//".to_string(),
            Some(end) => range(path, 0, end).to_string(),
        }
    }

    fn extname(&self, path: &str) -> String {
        TailScan::run::<PosixSeparators>(path, 0, 0)
            .extension()
            .map_or_else(String::new, |(dot, end)| range(path, dot, end).to_string())
    }

    fn join<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        for path in paths {
            let path = path.as_ref();
            if path.is_empty() {
                continue;
            }
            if !joined.is_empty() {
                joined.push('/');
            }
            joined.push_str(path);
        }

        if joined.is_empty() {
            return ".".to_string();
        }
        self.normalize(&joined)
    }

    fn normalize(&self, path: &str) -> String {
        if path.is_empty() {
            return ".".to_string();
        }
        let is_absolute = self.is_absolute(path);
        let trailing_separator = path.as_bytes().last() == Some(&CHAR_FORWARD_SLASH);

        let mut normalized = normalize_string::<PosixSeparators>(path, !is_absolute);
        if normalized.is_empty() {
            return match (is_absolute, trailing_separator) {
                (true, _) => "/".to_string(),
                (false, true) => "./".to_string(),
                (false, false) => ".".to_string(),
            };
        }
        if trailing_separator {
            normalized.push('/');
        }

        if is_absolute {
            format!("/{normalized}")
        } else {
            normalized
        }
    }

    fn parse(&self, path: &str) -> PathComponents {
        let mut parts = PathComponents::default();
        if path.is_empty() {
            return parts;
        }

        let is_absolute = self.is_absolute(path);
        let lower = if is_absolute {
            parts.root = "/".to_string();
            1
        } else {
            0
        };

        let scan = TailScan::run::<PosixSeparators>(path, lower, 0);
        if let Some(end) = scan.end {
            let start = if scan.start_part == 0 && is_absolute {
                1
            } else {
                scan.start_part
            };
            match scan.extension() {
                None => {
                    parts.base = range(path, start, end).to_string();
                    parts.name = parts.base.clone();
                }
                Some((dot, end)) => {
                    parts.name = range(path, start, dot).to_string();
                    parts.base = range(path, start, end).to_string();
                    parts.ext = range(path, dot, end).to_string();
                }
            }
        }

        if scan.start_part > 0 {
            parts.dir = range(path, 0, scan.start_part - 1).to_string();
        } else if is_absolute {
            parts.dir = "/".to_string();
        }

        parts
    }

    fn relative(&self, from: &str, to: &str) -> String {
        if from == to {
            return String::new();
        }
        let from = self.resolve([from]);
        let to = self.resolve([to]);
        if from == to {
            return String::new();
        }

        // Both are absolute now; compare past the leading `/`.
        let from_bytes = from.as_bytes();
        let to_bytes = to.as_bytes();
        let from_start = 1;
        let from_end = from_bytes.len();
        let from_len = from_end - from_start;
        let to_start = 1;
        let to_len = to_bytes.len() - to_start;
        let length = from_len.min(to_len);

        let mut last_common_sep: Option<usize> = None;
        let mut i = 0;
        while i < length {
            let code = from_bytes[from_start + i];
            if code != to_bytes[to_start + i] {
                break;
            }
            if is_posix_separator(code) {
                last_common_sep = Some(i);
            }
            i += 1;
        }

        if i == length {
            if to_len > length {
                if is_posix_separator(to_bytes[to_start + i]) {
                    // `from` is the exact base of `to`: `/foo/bar` -> `/foo/bar/baz`.
                    return tail(&to, to_start + i + 1).to_string();
                }
                if i == 0 {
                    // `from` is the root: `/` -> `/foo`.
                    return tail(&to, to_start + i).to_string();
                }
            } else if from_len > length {
                if is_posix_separator(from_bytes[from_start + i]) {
                    // `to` is the exact base of `from`: `/foo/bar/baz` -> `/foo/bar`.
                    last_common_sep = Some(i);
                } else if i == 0 {
                    // `to` is the root: `/foo` -> `/`.
                    last_common_sep = Some(0);
                }
            }
        }

        let mut out = String::new();
        let first = last_common_sep.map_or(0, |sep| sep + 1) + from_start;
        for k in first..=from_end {
            if k == from_end || is_posix_separator(from_bytes[k]) {
                out.push_str(if out.is_empty() { ".." } else { "/.." });
            }
        }

        // Keep the separator in front of the rest; `out` never ends in one.
        let rest_start = last_common_sep.map_or(0, |sep| to_start + sep);
        format!("{out}{}", tail(&to, rest_start))
    }

    fn resolve<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths: Vec<S> = paths.into_iter().collect();
        let mut resolved = String::new();
        let mut resolved_absolute = false;

        for path in paths.iter().rev() {
            let path = path.as_ref();
            if path.is_empty() {
                continue;
            }
            resolved = format!("{path}/{resolved}");
            resolved_absolute = self.is_absolute(path);
            if resolved_absolute {
                break;
            }
        }

        if !resolved_absolute {
            match self.cwd.current_dir() {
                Some(cwd) if !cwd.is_empty() => {
                    resolved = format!("{cwd}/{resolved}");
                    resolved_absolute = self.is_absolute(&cwd);
                }
                _ => log::debug!("no working directory available, leaving {resolved:?} relative"),
            }
        }

        let normalized = normalize_string::<PosixSeparators>(&resolved, !resolved_absolute);
        if resolved_absolute {
            format!("/{normalized}")
        } else if normalized.is_empty() {
            ".".to_string()
        } else {
            normalized
        }
    }

    fn to_namespaced_path(&self, path: &str) -> String {
        path.to_string()
    }
}
