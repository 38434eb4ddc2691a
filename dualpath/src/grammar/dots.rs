//! Dot-segment resolution shared by both grammars.

use crate::chars::{Separators, CHAR_DOT};
use crate::text::slice;

/// Resolve `.` and `..` segments in a root-less path.
///
/// Runs of separators collapse to one and the output uses `S::SEPARATOR`. A
/// `..` that would climb above the start is kept when `allow_above_root` is
/// true and dropped otherwise. Leading and trailing separators are not
/// preserved; callers put the root and trailing separator back themselves.
pub(crate) fn normalize_string<S: Separators>(path: &str, allow_above_root: bool) -> String {
    let bytes = path.as_bytes();
    let separator = char::from(S::SEPARATOR);
    let mut res = String::with_capacity(path.len());
    let mut last_segment_length = 0usize;
    // Index of the separator that opened the current segment; -1 before the start.
    let mut last_slash: isize = -1;
    // 0 or more: the segment so far is that many dots. -1: it is something else.
    let mut dots: i32 = 0;
    let mut code = 0u8;

    for i in 0..=bytes.len() {
        if let Some(&byte) = bytes.get(i) {
            code = byte;
        } else if S::is_separator(code) {
            break;
        } else {
            code = S::SEPARATOR;
        }

        if !S::is_separator(code) {
            dots = if code == CHAR_DOT && dots != -1 {
                dots + 1
            } else {
                -1
            };
            continue;
        }

        let index = isize::try_from(i).unwrap_or(isize::MAX);
        if last_slash == index - 1 || dots == 1 {
            // Empty segment or `.`.
        } else if dots == 2 {
            let previous_is_parent =
                res.len() >= 2 && last_segment_length == 2 && slice(&res, -2, None) == "..";
            if !previous_is_parent {
                if res.len() > 2 {
                    match res.rfind(separator) {
                        None => {
                            res.clear();
                            last_segment_length = 0;
                        }
                        Some(cut) => {
                            res.truncate(cut);
                            last_segment_length =
                                res.len() - res.rfind(separator).map_or(0, |at| at + 1);
                        }
                    }
                    last_slash = index;
                    dots = 0;
                    continue;
                } else if !res.is_empty() {
                    res.clear();
                    last_segment_length = 0;
                    last_slash = index;
                    dots = 0;
                    continue;
                }
            }
            if allow_above_root {
                if !res.is_empty() {
                    res.push(separator);
                }
                res.push_str("..");
                last_segment_length = 2;
            }
        } else {
            let start = usize::try_from(last_slash + 1).unwrap_or(0);
            if !res.is_empty() {
                res.push(separator);
            }
            res.push_str(path.get(start..i).unwrap_or_default());
            last_segment_length = i - start;
        }
        last_slash = index;
        dots = 0;
    }

    log::trace!("normalized dot segments of {path:?} into {res:?}");
    res
}
