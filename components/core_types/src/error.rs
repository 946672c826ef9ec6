//! Error types for value construction and error-code lookup.
//!
//! Inspecting a value never fails. The only fallible operations in this crate
//! are the ones that build a value from source text, such as compiling a
//! regular expression.

use thiserror::Error;

/// Errors raised while constructing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A regular expression flag appeared more than once
    #[error("Invalid flags: duplicate '{0}'")]
    DuplicateFlag(char),
    /// A regular expression flag is not recognized
    #[error("Invalid flag: '{0}'")]
    UnknownFlag(char),
    /// The 'u' and 'v' flags were combined
    #[error("Invalid flags: 'v' incompatible with 'u'")]
    IncompatibleFlags,
    /// The pattern could not be compiled
    #[error("Invalid regular expression /{pattern}/: {reason}")]
    InvalidPattern {
        /// Source pattern as written
        pattern: String,
        /// Reason reported by the regex engine
        reason: String,
    },
}

/// Errors that carry a machine-readable code.
///
/// Used to resolve an error's code from the error that caused it.
pub trait ErrorCode {
    /// The code attached to this error, if any.
    fn error_code(&self) -> Option<&str>;
}
