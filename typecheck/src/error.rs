//! Type-check error types.

use argus_core::TypeName;
use thiserror::Error;

/// Errors raised while building a validator tree from a type hint.
///
/// These surface when a guard is constructed, never at call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    /// The hint has no runtime instance-of meaning.
    #[error("Type hint validation for \"{hint}\" is not supported")]
    Unsupported { hint: String },

    /// A union hint with no members.
    #[error("Union hint must list at least one member")]
    EmptyUnion,

    /// A literal hint with no allowed values.
    #[error("Literal hint must list at least one allowed value")]
    EmptyLiteral,

    /// A parameterized collection hint with the wrong parameter count.
    #[error("{base} hint takes exactly {expected} parameter(s), got {actual}")]
    WrongArity {
        base: TypeName,
        expected: usize,
        actual: usize,
    },
}

impl HintError {
    pub fn unsupported(hint: impl ToString) -> Self {
        Self::Unsupported {
            hint: hint.to_string(),
        }
    }

    pub fn wrong_arity(base: TypeName, expected: usize, actual: usize) -> Self {
        Self::WrongArity {
            base,
            expected,
            actual,
        }
    }
}

/// Result type for validator construction.
pub type HintResult<T> = Result<T, HintError>;

/// Errors raised when a value fails a type check.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeCheckError {
    /// The value does not match the hint.
    #[error("Expected {expected} not {actual}")]
    Mismatch { expected: String, actual: String },

    /// A key or value inside a mapping failed a deep check.
    #[error("Found an invalid entry in the mapping. Expected \"{expected}\"")]
    InvalidEntry { expected: String },

    /// An element inside a sequence failed a deep check.
    #[error("Found an invalid element in the sequence. Expected \"{expected}\" but got \"{actual}\"")]
    InvalidElement { expected: String, actual: String },
}

impl TypeCheckError {
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_entry(expected: impl Into<String>) -> Self {
        Self::InvalidEntry {
            expected: expected.into(),
        }
    }

    pub fn invalid_element(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidElement {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type for type checks.
pub type TypeCheckResult<T> = Result<T, TypeCheckError>;
