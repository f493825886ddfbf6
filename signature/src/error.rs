//! Signature error types.

use thiserror::Error;

/// Errors that can occur while registering a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Two parameters share a name.
    #[error("Duplicate parameter name: {0}")]
    DuplicateParam(String),
}

/// Result type for signature registration.
pub type SignatureResult<T> = Result<T, SignatureError>;
