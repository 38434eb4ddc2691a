//! The Windows path grammar.
//!
//! Both `\` and `/` separate segments; `\` is what the grammar emits. A path
//! may start with one of these roots:
//!
//! | Root             | Example             | Absolute |
//! |------------------|---------------------|----------|
//! | drive            | `C:foo`             | no       |
//! | drive root       | `C:\foo`            | yes      |
//! | separator        | `\foo`              | yes      |
//! | UNC share        | `\\server\share\x`  | yes      |
//!
//! A drive-relative path such as `C:foo` resolves against the working
//! directory remembered for that drive (see [`CwdProvider::drive_dir`]).

use crate::chars::{
    code_at, is_device_root, is_windows_separator, WindowsSeparators, CHAR_BACKWARD_SLASH,
    CHAR_COLON, CHAR_DOT, CHAR_QUESTION_MARK,
};
use crate::components::PathComponents;
use crate::cwd::{CwdProvider, OsCwd};
use crate::text::{range, tail};

use super::dots::normalize_string;
use super::scan::{self, TailScan};
use super::PathGrammar;

/// Windows path syntax, including drive letters and UNC shares.
///
/// # Examples
///
/// ```
/// use dualpath::{FixedCwd, PathGrammar, Windows};
///
/// let windows = Windows::with_cwd(FixedCwd::new("C:\\Users\\me"));
/// assert_eq!(windows.resolve(["docs", "..\\music"]), "C:\\Users\\me\\music");
/// assert_eq!(windows.dirname("\\\\server\\share\\dir\\file"), "\\\\server\\share\\dir");
/// assert_eq!(windows.relative("C:\\orandea\\test\\aaa", "C:\\orandea\\impl\\bbb"), "..\\..\\impl\\bbb");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Windows<C = OsCwd> {
    cwd: C,
}

impl Windows<OsCwd> {
    /// A Windows grammar reading the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self { cwd: OsCwd }
    }
}

impl<C: CwdProvider> Windows<C> {
    /// A Windows grammar reading working directories from `cwd`.
    #[must_use]
    pub fn with_cwd(cwd: C) -> Self {
        Self { cwd }
    }

    /// The working directory source.
    pub fn cwd(&self) -> &C {
        &self.cwd
    }

    /// The directory that completes a resolution once the arguments run out.
    fn fallback_dir(&self, device: &str) -> Option<String> {
        let current = || self.cwd.current_dir().filter(|dir| !dir.is_empty());
        if device.is_empty() {
            return current();
        }

        // UNC devices are always absolute, so `device` is a drive here.
        let found = self
            .cwd
            .drive_dir(device)
            .filter(|dir| !dir.is_empty())
            .or_else(current);
        match found {
            Some(dir)
                if !range(&dir, 0, 2).eq_ignore_ascii_case(device)
                    && code_at(&dir, 2) == Some(CHAR_BACKWARD_SLASH) =>
            {
                log::debug!("working directory {dir:?} is not on drive {device}, using its root");
                Some(format!("{device}\\"))
            }
            Some(dir) => Some(dir),
            None => {
                log::debug!("no working directory for drive {device}, using its root");
                Some(format!("{device}\\"))
            }
        }
    }
}

/// A `\\server\share` prefix.
struct UncRoot<'a> {
    server: &'a str,
    share: &'a str,
    /// Offset one past the share name.
    end: usize,
}

impl UncRoot<'_> {
    fn device(&self) -> String {
        format!("\\\\{}\\{}", self.server, self.share)
    }
}

/// Match a UNC root on a path whose first two bytes are separators.
///
/// Server and share must both be non-empty and the server must be followed
/// by at least one separator.
fn match_unc(path: &str) -> Option<UncRoot<'_>> {
    let bytes = path.as_bytes();
    let len = bytes.len();
    let skip = |mut j: usize, separators: bool| {
        while j < len && is_windows_separator(bytes[j]) == separators {
            j += 1;
        }
        j
    };

    let server_end = skip(2, false);
    if server_end == 2 || server_end >= len {
        return None;
    }
    let share_start = skip(server_end, true);
    if share_start == server_end || share_start >= len {
        return None;
    }
    let end = skip(share_start, false);

    Some(UncRoot {
        server: range(path, 2, server_end),
        share: range(path, share_start, end),
        end,
    })
}

/// Whether `path` starts with a drive letter and a colon.
fn has_drive(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && is_device_root(bytes[0]) && bytes[1] == CHAR_COLON
}

fn starts_with_separator(path: &str, at: usize) -> bool {
    code_at(path, at).is_some_and(is_windows_separator)
}

/// The root of a path as `normalize` and `resolve` see it.
#[derive(Default)]
struct Root {
    /// `C:` or `\\server\share`, or empty.
    device: String,
    /// Offset where the part after the root begins.
    end: usize,
    absolute: bool,
    /// The path is nothing but a UNC root.
    bare_unc: bool,
}

fn split_root(path: &str) -> Root {
    let mut root = Root::default();
    if starts_with_separator(path, 0) {
        root.absolute = true;
        if starts_with_separator(path, 1) {
            // A failed UNC match leaves the separators to normalization.
            if let Some(unc) = match_unc(path) {
                root.device = unc.device();
                root.end = unc.end;
                root.bare_unc = unc.end == path.len();
            }
        } else {
            root.end = 1;
        }
    } else if has_drive(path) {
        root.device = range(path, 0, 2).to_string();
        root.end = 2;
        if starts_with_separator(path, 2) {
            root.absolute = true;
            root.end = 3;
        }
    }
    root
}

impl<C: CwdProvider> PathGrammar for Windows<C> {
    fn separator(&self) -> char {
        '\\'
    }

    fn delimiter(&self) -> char {
        ';'
    }

    fn is_absolute(&self, path: &str) -> bool {
        starts_with_separator(path, 0)
            || (path.len() > 2 && has_drive(path) && starts_with_separator(path, 2))
    }

    fn basename(&self, path: &str, ext: Option<&str>) -> String {
        let lower = if has_drive(path) { 2 } else { 0 };
        scan::basename::<WindowsSeparators>(path, ext, lower)
    }

    fn dirname(&self, path: &str) -> String {
        let len = path.len();
        if len == 0 {
            return ".".to_string();
        }
        if len == 1 {
            return if starts_with_separator(path, 0) {
                path.to_string()
            } else {
                ".".to_string()
            };
        }

        let mut root_end = None;
        let mut offset = 0;
        if starts_with_separator(path, 0) {
            root_end = Some(1);
            offset = 1;
            if starts_with_separator(path, 1) {
                if let Some(unc) = match_unc(path) {
                    if unc.end == len {
                        return path.to_string();
                    }
                    root_end = Some(unc.end + 1);
                    offset = unc.end + 1;
                }
            }
        } else if has_drive(path) {
            let end = if starts_with_separator(path, 2) { 3 } else { 2 };
            root_end = Some(end);
            offset = end;
        }

        let bytes = path.as_bytes();
        let mut end = None;
        let mut matched_slash = true;
        for i in (offset..len).rev() {
            if is_windows_separator(bytes[i]) {
                if !matched_slash {
                    end = Some(i);
                    break;
                }
            } else {
                matched_slash = false;
            }
        }

        match end.or(root_end) {
            Some(end) => range(path, 0, end).to_string(),
            None => ".".to_string(),
        }
    }

    fn extname(&self, path: &str) -> String {
        let lower = if has_drive(path) { 2 } else { 0 };
        TailScan::run::<WindowsSeparators>(path, lower, lower)
            .extension()
            .map_or_else(String::new, |(dot, end)| range(path, dot, end).to_string())
    }

    fn join<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = String::new();
        let mut first_part: Option<String> = None;
        for path in paths {
            let path = path.as_ref();
            if path.is_empty() {
                continue;
            }
            if first_part.is_none() {
                first_part = Some(path.to_string());
            } else {
                joined.push('\\');
            }
            joined.push_str(path);
        }
        let Some(first_part) = first_part else {
            return ".".to_string();
        };

        // The joined string must not start with a UNC root unless the first
        // part does; `join("//server", "share")` is the one sanctioned way to
        // build one from pieces. Extra leading separators collapse to one.
        let mut needs_replace = true;
        let mut slash_count = 0;
        if starts_with_separator(&first_part, 0) {
            slash_count += 1;
            if starts_with_separator(&first_part, 1) {
                slash_count += 1;
                if first_part.len() > 2 {
                    if starts_with_separator(&first_part, 2) {
                        slash_count += 1;
                    } else {
                        // `\\server`: a UNC root was asked for.
                        needs_replace = false;
                    }
                }
            }
        }
        if needs_replace {
            while starts_with_separator(&joined, slash_count) {
                slash_count += 1;
            }
            if slash_count >= 2 {
                joined = format!("\\{}", tail(&joined, slash_count));
            }
        }

        self.normalize(&joined)
    }

    fn normalize(&self, path: &str) -> String {
        let len = path.len();
        if len == 0 {
            return ".".to_string();
        }
        if len == 1 {
            return if path == "/" {
                "\\".to_string()
            } else {
                path.to_string()
            };
        }

        let root = split_root(path);
        if root.bare_unc {
            return format!("{}\\", root.device);
        }

        let mut rest = if root.end < len {
            normalize_string::<WindowsSeparators>(tail(path, root.end), !root.absolute)
        } else {
            String::new()
        };
        if rest.is_empty() && !root.absolute {
            rest.push('.');
        }
        if !rest.is_empty() && path.as_bytes().last().copied().is_some_and(is_windows_separator) {
            rest.push('\\');
        }

        if root.absolute {
            format!("{}\\{rest}", root.device)
        } else {
            format!("{}{rest}", root.device)
        }
    }

    fn parse(&self, path: &str) -> PathComponents {
        let mut parts = PathComponents::default();
        let len = path.len();
        if len == 0 {
            return parts;
        }
        if len == 1 {
            if starts_with_separator(path, 0) {
                parts.root = path.to_string();
                parts.dir = path.to_string();
            } else {
                parts.base = path.to_string();
                parts.name = path.to_string();
            }
            return parts;
        }

        let mut root_end = 0;
        if starts_with_separator(path, 0) {
            root_end = 1;
            if starts_with_separator(path, 1) {
                if let Some(unc) = match_unc(path) {
                    root_end = if unc.end == len { unc.end } else { unc.end + 1 };
                }
            }
        } else if has_drive(path) {
            if len == 2 || (len == 3 && starts_with_separator(path, 2)) {
                parts.root = path.to_string();
                parts.dir = path.to_string();
                return parts;
            }
            root_end = if starts_with_separator(path, 2) { 3 } else { 2 };
        }
        parts.root = range(path, 0, root_end).to_string();

        let scan = TailScan::run::<WindowsSeparators>(path, root_end, root_end);
        let start = scan.start_part;
        if let Some(end) = scan.end {
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

        parts.dir = if start > 0 && start != root_end {
            range(path, 0, start - 1).to_string()
        } else {
            parts.root.clone()
        };

        parts
    }

    fn relative(&self, from: &str, to: &str) -> String {
        if from == to {
            return String::new();
        }
        let from_orig = self.resolve([from]);
        let to_orig = self.resolve([to]);
        if from_orig == to_orig {
            return String::new();
        }

        let from = from_orig.to_ascii_lowercase();
        let to = to_orig.to_ascii_lowercase();
        if from == to {
            return String::new();
        }

        let (from_start, from_end) = trim_backslashes(&from);
        let (mut to_start, to_end) = trim_backslashes(&to);
        let from_len = from_end - from_start;
        let to_len = to_end - to_start;
        let length = from_len.min(to_len);
        let from_bytes = from.as_bytes();
        let to_bytes = to.as_bytes();

        let mut last_common_sep: Option<usize> = None;
        let mut i = 0;
        while i < length {
            let code = from_bytes[from_start + i];
            if code != to_bytes[to_start + i] {
                break;
            }
            if code == CHAR_BACKWARD_SLASH {
                last_common_sep = Some(i);
            }
            i += 1;
        }

        let last_common_sep = if i == length {
            if to_len > length {
                if to_bytes[to_start + i] == CHAR_BACKWARD_SLASH {
                    // `from` is the exact base of `to`: `C:\foo\bar` -> `C:\foo\bar\baz`.
                    return tail(&to_orig, to_start + i + 1).to_string();
                }
                if i == 2 {
                    // `from` is a drive root: `C:\` -> `C:\foo`.
                    return tail(&to_orig, to_start + i).to_string();
                }
            }
            if from_len > length {
                if from_bytes[from_start + i] == CHAR_BACKWARD_SLASH {
                    // `to` is the exact base of `from`: `C:\foo\bar\baz` -> `C:\foo\bar`.
                    last_common_sep = Some(i);
                } else if i == 2 {
                    // `to` is a drive root: `C:\foo\bar` -> `C:\`.
                    last_common_sep = Some(3);
                }
            }
            last_common_sep.unwrap_or(0)
        } else if let Some(sep) = last_common_sep {
            sep
        } else {
            log::debug!("{from_orig:?} and {to_orig:?} share no root, returning the target");
            return to_orig;
        };

        let mut out = String::new();
        for k in (from_start + last_common_sep + 1)..=from_end {
            if k == from_end || from_bytes[k] == CHAR_BACKWARD_SLASH {
                out.push_str(if out.is_empty() { ".." } else { "\\.." });
            }
        }

        to_start += last_common_sep;
        if out.is_empty() {
            if code_at(&to_orig, to_start) == Some(CHAR_BACKWARD_SLASH) {
                to_start += 1;
            }
            return range(&to_orig, to_start, to_end).to_string();
        }
        format!("{out}{}", range(&to_orig, to_start, to_end))
    }

    fn resolve<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths: Vec<S> = paths.into_iter().collect();
        let mut state = Resolution::default();

        let mut finished = false;
        for path in paths.iter().rev() {
            let path = path.as_ref();
            if !path.is_empty() && state.absorb(path) {
                finished = true;
                break;
            }
        }
        if !finished {
            match self.fallback_dir(&state.device) {
                Some(dir) => {
                    state.absorb(&dir);
                }
                None => log::debug!("no working directory available, resolution may stay relative"),
            }
        }

        state.finish()
    }

    fn to_namespaced_path(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }

        let resolved = self.resolve([path]);
        if resolved.len() <= 2 {
            return path.to_string();
        }

        let bytes = resolved.as_bytes();
        if bytes[0] == CHAR_BACKWARD_SLASH {
            if bytes[1] == CHAR_BACKWARD_SLASH && bytes[2] != CHAR_QUESTION_MARK && bytes[2] != CHAR_DOT {
                return format!("\\\\?\\UNC\\{}", tail(&resolved, 2));
            }
        } else if has_drive(&resolved) && bytes[2] == CHAR_BACKWARD_SLASH {
            return format!("\\\\?\\{resolved}");
        }

        path.to_string()
    }
}

/// Offsets of `path` with leading `\` skipped and trailing `\` trimmed, keeping
/// at least one byte after the start.
fn trim_backslashes(path: &str) -> (usize, usize) {
    let bytes = path.as_bytes();
    let mut start = 0;
    while start < bytes.len() && bytes[start] == CHAR_BACKWARD_SLASH {
        start += 1;
    }
    let mut end = bytes.len();
    while end > start + 1 && bytes[end - 1] == CHAR_BACKWARD_SLASH {
        end -= 1;
    }
    (start, end)
}

/// Accumulated state of a right-to-left resolution.
#[derive(Default)]
struct Resolution {
    device: String,
    tail: String,
    absolute: bool,
}

impl Resolution {
    /// Fold `path` into the state. Returns true once nothing further to the
    /// left can change the result.
    fn absorb(&mut self, path: &str) -> bool {
        let root = split_root(path);

        if !root.device.is_empty() {
            if self.device.is_empty() {
                self.device = root.device;
            } else if !root.device.eq_ignore_ascii_case(&self.device) {
                // Another device; this path does not apply.
                return false;
            }
        }

        if self.absolute {
            return !self.device.is_empty();
        }
        self.tail = format!("{}\\{}", tail(path, root.end), self.tail);
        self.absolute = root.absolute;
        self.absolute && !self.device.is_empty()
    }

    fn finish(self) -> String {
        let rest = normalize_string::<WindowsSeparators>(&self.tail, !self.absolute);
        if self.absolute {
            format!("{}\\{rest}", self.device)
        } else {
            let resolved = format!("{}{rest}", self.device);
            if resolved.is_empty() {
                ".".to_string()
            } else {
                resolved
            }
        }
    }
}
