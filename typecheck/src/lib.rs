//! Argus Typecheck
//!
//! Build validator trees from type hints and test values against them.
//!
//! Responsibilities:
//! - Dispatch a hint to its validator variant
//! - Shallow and deep collection checks
//! - Union first-success semantics in declaration order
//! - Render value type descriptions for error messages

mod describe;
mod error;
mod factory;
mod validator;

pub use describe::describe_value;
pub use error::{HintError, HintResult, TypeCheckError, TypeCheckResult};
pub use factory::build_validator;
pub use validator::Validator;
