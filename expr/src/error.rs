//! Expression error types.

use thiserror::Error;

/// Errors raised while building an expression tree.
///
/// Some operations cannot be deferred; requesting one fails immediately
/// when the expression is composed, before any value is substituted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The requested operation cannot appear in a deferred expression.
    #[error("Use of {operation} in a deferred expression is unsupported")]
    Unsupported { operation: &'static str },
}

impl BuildError {
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }
}

/// Result type for expression construction.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised while substituting a value into an expression tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Operand types do not support the operation.
    #[error("type error: {message}")]
    TypeError { message: String },

    /// Division or modulo by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    /// A method call named an unknown built-in.
    #[error("Unknown method '{name}'")]
    UnknownMethod { name: String },

    /// An attribute fetch named a missing field.
    #[error("Unknown attribute '{attr}' on {type_name}")]
    UnknownAttribute { attr: String, type_name: String },
}

impl EvalError {
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::TypeError {
            message: message.into(),
        }
    }

    pub fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self::UnknownMethod { name: name.into() }
    }

    pub fn unknown_attribute(attr: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            attr: attr.into(),
            type_name: type_name.into(),
        }
    }
}

/// Result type for substitution.
pub type EvalResult<T> = Result<T, EvalError>;
