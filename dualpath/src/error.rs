//! Error types for the dualpath library.
//!
//! Path strings themselves are never malformed: every input string produces a
//! defined result. Errors only arise at the dynamic edges of the API, where
//! loosely typed values are interpreted as path segments or path components.

use thiserror::Error;

/// Result type alias for operations that may fail with a dualpath error.
///
/// # Examples
///
/// ```
/// use dualpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok(String::from("/tmp"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the dualpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value could not be interpreted as the argument an operation needs.
    #[error("invalid argument to {operation}(): {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// The reason the argument is invalid.
        reason: String,
    },

    /// A path component record was addressed with an unknown field name.
    #[error("unknown path component field '{field}': expected one of root, dir, base, ext, name")]
    UnknownField {
        /// The offending field name.
        field: String,
    },

    /// A grammar name could not be recognized.
    #[error("unknown path grammar '{value}': expected posix, windows or native")]
    UnknownGrammar {
        /// The unrecognized grammar name.
        value: String,
    },

    /// A JSON document could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] for the given operation.
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }

    /// Check if error reports an invalid argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use dualpath::Error;
    ///
    /// let err = Error::InvalidArgument {
    ///     operation: "join",
    ///     reason: "all paths must be strings".to_string(),
    /// };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error reports an unknown component field.
    #[must_use]
    pub fn is_unknown_field(&self) -> bool {
        matches!(self, Self::UnknownField { .. })
    }
}
