//! Guard error types.

use argus_core::Value;
use argus_expr::EvalError;
use argus_typecheck::{HintError, TypeCheckError};
use thiserror::Error;

/// Errors raised while attaching a guard to a signature.
///
/// These are fatal to guard construction and surface immediately to the
/// code registering the guard; they are never deferred to call time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuardError {
    /// The signature accepts variable-length arguments.
    #[error("Variadic arguments are not supported")]
    VariadicArgs,

    /// A parameter lacks a hint while every hint is required.
    #[error("One or more type hints are missing from the signature")]
    MissingHints,

    /// The guard names a parameter the signature does not declare.
    #[error("Cannot guard non-existent parameter \"{name}\"")]
    UnknownParam { name: String },

    /// A range bound is not a number.
    #[error("Range for \"{name}\" must contain only numbers")]
    NonNumericRange { name: String },

    /// The membership collection does not support containment tests.
    #[error("Values for \"{name}\" do not support membership testing")]
    NotAContainer { name: String },

    /// A hint could not be turned into a validator.
    #[error(transparent)]
    Hint(#[from] HintError),
}

impl GuardError {
    pub fn unknown_param(name: impl Into<String>) -> Self {
        Self::UnknownParam { name: name.into() }
    }

    pub fn non_numeric_range(name: impl Into<String>) -> Self {
        Self::NonNumericRange { name: name.into() }
    }

    pub fn not_a_container(name: impl Into<String>) -> Self {
        Self::NotAContainer { name: name.into() }
    }
}

/// Result type for guard construction.
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors raised when a guarded call is rejected.
///
/// Every variant reports the offending parameter name and an
/// expectation-vs-actual description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidateError {
    /// An argument failed its type-hint check.
    #[error("Invalid type supplied for argument \"{name}\": {detail}")]
    InvalidType {
        name: String,
        detail: String,
        /// Retained unless the guard was built with `clean_trace`.
        #[source]
        cause: Option<TypeCheckError>,
    },

    /// An argument fell outside its inclusive range.
    #[error("Value for \"{name}\" must be in the range [{lower}, {upper}], but got {actual}")]
    OutOfRange {
        name: String,
        lower: Value,
        upper: Value,
        actual: Value,
    },

    /// An argument could not be compared against its range bounds.
    #[error("Cannot validate the range of argument \"{name}\": the value is non-numeric")]
    NotComparable { name: String },

    /// An argument was not found among the allowed values.
    #[error("Value for \"{name}\" is not one of the allowed values: {allowed}")]
    NotAMember { name: String, allowed: Value },

    /// A predicate expression evaluated to a falsy result.
    #[error("Value for \"{name}\" ({value}) does not meet the required criteria")]
    PredicateFailed { name: String, value: Value },

    /// A predicate expression could not be evaluated.
    #[error("Could not evaluate the expression for \"{name}\"")]
    Expression {
        name: String,
        #[source]
        cause: EvalError,
    },

    /// A guarded parameter was missing from the call.
    #[error("Missing required argument \"{name}\"")]
    MissingArgument { name: String },
}

impl ValidateError {
    pub fn not_comparable(name: impl Into<String>) -> Self {
        Self::NotComparable { name: name.into() }
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }
}

/// Result type for call-time checks.
pub type ValidateResult<T> = Result<T, ValidateError>;
