//! Byte classification for path grammars.
//!
//! Every algorithm in this crate walks its input as a sequence of bytes. The
//! characters that carry meaning (separators, dots, the drive colon) are all
//! ASCII, so a match on one of them always lands on a UTF-8 character
//! boundary and slicing there is safe.

/// `A`, the first upper-case drive letter.
pub const CHAR_UPPERCASE_A: u8 = b'A';
/// `Z`, the last upper-case drive letter.
pub const CHAR_UPPERCASE_Z: u8 = b'Z';
/// `a`, the first lower-case drive letter.
pub const CHAR_LOWERCASE_A: u8 = b'a';
/// `z`, the last lower-case drive letter.
pub const CHAR_LOWERCASE_Z: u8 = b'z';
/// `.`
pub const CHAR_DOT: u8 = b'.';
/// `/`
pub const CHAR_FORWARD_SLASH: u8 = b'/';
/// `\`
pub const CHAR_BACKWARD_SLASH: u8 = b'\\';
/// `:`
pub const CHAR_COLON: u8 = b':';
/// `?`
pub const CHAR_QUESTION_MARK: u8 = b'?';

/// Returns true for the POSIX separator `/`.
#[must_use]
pub const fn is_posix_separator(code: u8) -> bool {
    code == CHAR_FORWARD_SLASH
}

/// Returns true for either Windows separator, `/` or `\`.
#[must_use]
pub const fn is_windows_separator(code: u8) -> bool {
    code == CHAR_FORWARD_SLASH || code == CHAR_BACKWARD_SLASH
}

/// Returns true for a byte that can name a Windows drive (`A`-`Z`, `a`-`z`).
///
/// # Examples
///
/// ```
/// use dualpath::chars::is_device_root;
///
/// assert!(is_device_root(b'C'));
/// assert!(is_device_root(b'z'));
/// assert!(!is_device_root(b'1'));
/// ```
#[must_use]
pub const fn is_device_root(code: u8) -> bool {
    (code >= CHAR_UPPERCASE_A && code <= CHAR_UPPERCASE_Z)
        || (code >= CHAR_LOWERCASE_A && code <= CHAR_LOWERCASE_Z)
}

/// Separator rules of one grammar, resolved at compile time.
///
/// The grammar-agnostic algorithms are generic over this trait, so each
/// grammar gets its own monomorphized copy with the predicate inlined.
pub trait Separators {
    /// The separator the grammar emits when it builds a path.
    const SEPARATOR: u8;

    /// Whether `code` separates two path segments.
    fn is_separator(code: u8) -> bool;
}

/// Separator rules of the POSIX grammar: only `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixSeparators;

impl Separators for PosixSeparators {
    const SEPARATOR: u8 = CHAR_FORWARD_SLASH;

    fn is_separator(code: u8) -> bool {
        is_posix_separator(code)
    }
}

/// Separator rules of the Windows grammar: `\` is emitted, `/` is also accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowsSeparators;

impl Separators for WindowsSeparators {
    const SEPARATOR: u8 = CHAR_BACKWARD_SLASH;

    fn is_separator(code: u8) -> bool {
        is_windows_separator(code)
    }
}

/// Byte at `index`, or `None` past the end.
pub(crate) fn code_at(path: &str, index: usize) -> Option<u8> {
    path.as_bytes().get(index).copied()
}
