//! Argus Signature
//!
//! Explicit registration of callable signatures and call-time argument
//! binding.
//!
//! Responsibilities:
//! - Declare parameter names and optional type hints through a builder
//! - Detect receiver parameters and variadic signatures
//! - Bind positional/keyword arguments to parameter names

mod args;
mod error;
mod signature;

pub use args::{Args, BoundArgs};
pub use error::{SignatureError, SignatureResult};
pub use signature::{Param, Signature, SignatureBuilder, RECEIVER_NAMES};
