//! Backward scans over the last segment of a path.
//!
//! `basename`, `extname` and `parse` all walk a path from its end towards a
//! lower bound (past any root), skipping trailing separators, to find where
//! the last segment starts and ends and where its extension begins.

use crate::chars::{Separators, CHAR_DOT};
use crate::text::range;

/// The last segment of `path[lower..]`, with `ext` stripped from its end.
///
/// A suffix equal to the whole segment is not stripped. A path consisting of
/// separators only yields `""`, except when `ext` is given, in which case the
/// separators themselves are returned.
pub(crate) fn basename<S: Separators>(path: &str, ext: Option<&str>, lower: usize) -> String {
    let bytes = path.as_bytes();
    let mut start = lower;
    let mut end: Option<usize> = None;
    let mut matched_slash = true;

    if let Some(ext) = ext.filter(|ext| !ext.is_empty() && ext.len() <= path.len()) {
        if ext == path {
            return String::new();
        }
        let ext = ext.as_bytes();
        // Position in `ext` still to be matched; `None` once matched or failed.
        let mut ext_index = Some(ext.len() - 1);
        let mut first_non_slash_end: Option<usize> = None;

        for i in (lower..bytes.len()).rev() {
            let code = bytes[i];
            if S::is_separator(code) {
                if !matched_slash {
                    start = i + 1;
                    break;
                }
                continue;
            }
            if first_non_slash_end.is_none() {
                matched_slash = false;
                first_non_slash_end = Some(i + 1);
            }
            if let Some(at) = ext_index {
                if code == ext[at] {
                    if at == 0 {
                        end = Some(i);
                    }
                    ext_index = at.checked_sub(1);
                } else {
                    ext_index = None;
                    end = first_non_slash_end;
                }
            }
        }

        let end = if end == Some(start) {
            first_non_slash_end
        } else {
            end
        };
        return range(path, start, end.unwrap_or(bytes.len())).to_string();
    }

    for i in (lower..bytes.len()).rev() {
        if S::is_separator(bytes[i]) {
            if !matched_slash {
                start = i + 1;
                break;
            }
        } else if end.is_none() {
            matched_slash = false;
            end = Some(i + 1);
        }
    }

    end.map_or_else(String::new, |end| range(path, start, end).to_string())
}

/// What the last segment looks like before its last dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreDot {
    /// No byte before the last dot yet.
    Unseen,
    /// Only dots so far.
    OnlyDots,
    /// Something other than a dot.
    Other,
}

/// Boundaries of the last segment of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TailScan {
    /// Offset of the last dot in the segment.
    pub start_dot: Option<usize>,
    /// Offset where the segment starts.
    pub start_part: usize,
    /// Offset one past the segment's last byte, `None` for an empty segment.
    pub end: Option<usize>,
    pre_dot: PreDot,
}

impl TailScan {
    /// Scan `path` backwards down to `lower`. `start_part` is reported as is
    /// when no separator bounds the segment.
    pub(crate) fn run<S: Separators>(path: &str, lower: usize, start_part: usize) -> Self {
        let bytes = path.as_bytes();
        let mut scan = Self {
            start_dot: None,
            start_part,
            end: None,
            pre_dot: PreDot::Unseen,
        };
        let mut matched_slash = true;

        for i in (lower..bytes.len()).rev() {
            let code = bytes[i];
            if S::is_separator(code) {
                if !matched_slash {
                    scan.start_part = i + 1;
                    break;
                }
                continue;
            }
            if scan.end.is_none() {
                matched_slash = false;
                scan.end = Some(i + 1);
            }
            if code == CHAR_DOT {
                if scan.start_dot.is_none() {
                    scan.start_dot = Some(i);
                } else if scan.pre_dot != PreDot::OnlyDots {
                    scan.pre_dot = PreDot::OnlyDots;
                }
            } else if scan.start_dot.is_some() {
                scan.pre_dot = PreDot::Other;
            }
        }

        scan
    }

    /// The `(dot, end)` span of the extension, if the segment has one.
    ///
    /// A segment without a dot, a dotfile such as `.profile`, and the `..`
    /// segment have no extension.
    pub(crate) fn extension(&self) -> Option<(usize, usize)> {
        let (dot, end) = (self.start_dot?, self.end?);
        match self.pre_dot {
            PreDot::Unseen => None,
            PreDot::OnlyDots if dot + 1 == end && dot == self.start_part + 1 => None,
            _ => Some((dot, end)),
        }
    }
}
