//! Argus Expr
//!
//! Build deferred expression trees from a value placeholder and evaluate
//! them later against concrete values.
//!
//! Responsibilities:
//! - Absorb operations on the placeholder into expression nodes
//! - Reject operations that cannot be deferred, at construction time
//! - Substitute a value for every placeholder and evaluate the tree

mod error;
mod eval;
mod expr;
mod ops;

pub use error::{BuildError, BuildResult, EvalError, EvalResult};
pub use expr::{Expr, Op, Operand, X};
pub use ops::Absorb;
