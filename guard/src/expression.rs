//! Expression guard.

use crate::error::{GuardError, GuardResult, ValidateError, ValidateResult};
use crate::Guard;
use argus_expr::Expr;
use argus_signature::{Args, Signature};

/// Checks argument values against deferred predicate expressions.
///
/// Each predicate is an expression tree built from the placeholder; the
/// bound argument is substituted at call time and the result must be
/// truthy. The trees are never mutated, so one guard serves any number
/// of calls.
#[derive(Debug, Clone)]
pub struct ExprGuard {
    signature: Signature,
    predicates: Vec<(String, Expr)>,
}

impl ExprGuard {
    /// Start building an expression guard for the given signature.
    pub fn builder(signature: &Signature) -> ExprGuardBuilder {
        ExprGuardBuilder {
            signature: signature.clone(),
            predicates: Vec::new(),
        }
    }
}

/// Builder for an [`ExprGuard`].
#[derive(Debug)]
pub struct ExprGuardBuilder {
    signature: Signature,
    predicates: Vec<(String, Expr)>,
}

impl ExprGuardBuilder {
    /// Require the named parameter to satisfy the predicate.
    pub fn require(mut self, name: impl Into<String>, predicate: Expr) -> Self {
        self.predicates.push((name.into(), predicate));
        self
    }

    /// Build the guard, validating the parameter names. Expression
    /// well-formedness needs no check here; the `Expr` type only admits
    /// trees built from the placeholder.
    pub fn build(self) -> GuardResult<ExprGuard> {
        for (name, _) in &self.predicates {
            if !self.signature.has_param(name) {
                return Err(GuardError::unknown_param(name.clone()));
            }
        }
        Ok(ExprGuard {
            signature: self.signature,
            predicates: self.predicates,
        })
    }
}

impl Guard for ExprGuard {
    fn check(&self, args: &Args) -> ValidateResult<()> {
        let bound = self.signature.bind(args);
        for (name, predicate) in &self.predicates {
            let value = match bound.get(name) {
                Some(value) => value,
                None => return Err(ValidateError::missing_argument(name.clone())),
            };
            let result = predicate.substitute(value).map_err(|cause| {
                ValidateError::Expression {
                    name: name.clone(),
                    cause,
                }
            })?;
            if !result.is_truthy() {
                return Err(ValidateError::PredicateFailed {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
