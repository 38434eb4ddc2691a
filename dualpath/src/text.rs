//! Substring helpers with JavaScript `String.prototype.slice` semantics.

/// Returns the substring of `value` between byte offsets `start` and `end`.
///
/// Negative offsets count back from the end of the string and every offset is
/// clamped into `0..=value.len()`. An absent `end` means the end of the
/// string. A range that is empty after clamping, or whose bounds do not fall
/// on character boundaries, yields `""`.
///
/// # Examples
///
/// ```
/// use dualpath::text::slice;
///
/// assert_eq!(slice("basename.ext", 0, Some(8)), "basename");
/// assert_eq!(slice("basename.ext", -4, None), ".ext");
/// assert_eq!(slice("basename.ext", 2, Some(-4)), "sename");
/// assert_eq!(slice("abc", 2, Some(1)), "");
/// ```
#[must_use]
pub fn slice(value: &str, start: isize, end: Option<isize>) -> &str {
    let len = value.len();
    let from = clamp_offset(start, len);
    let to = end.map_or(len, |end| clamp_offset(end, len));
    range(value, from, to)
}

/// Returns `value[start..end]` clamped to the string, or `""` for an empty range.
#[must_use]
pub fn range(value: &str, start: usize, end: usize) -> &str {
    let end = end.min(value.len());
    if start >= end {
        return "";
    }
    value.get(start..end).unwrap_or_default()
}

/// Returns `value[start..]`, or `""` when `start` is past the end.
#[must_use]
pub fn tail(value: &str, start: usize) -> &str {
    range(value, start, value.len())
}

fn clamp_offset(offset: isize, len: usize) -> usize {
    if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    }
}
