//! Range guard.

use crate::error::{GuardError, GuardResult, ValidateError, ValidateResult};
use crate::Guard;
use argus_core::Value;
use argus_signature::{Args, Signature};
use std::cmp::Ordering;

/// Inclusive numeric bounds for one parameter.
#[derive(Debug, Clone, PartialEq)]
struct Bound {
    name: String,
    lower: Value,
    upper: Value,
}

/// Checks that argument values fall within inclusive numeric ranges.
#[derive(Debug, Clone)]
pub struct RangeGuard {
    signature: Signature,
    bounds: Vec<Bound>,
}

impl RangeGuard {
    /// Start building a range guard for the given signature.
    pub fn builder(signature: &Signature) -> RangeGuardBuilder {
        RangeGuardBuilder {
            signature: signature.clone(),
            bounds: Vec::new(),
        }
    }
}

/// Builder for a [`RangeGuard`].
#[derive(Debug)]
pub struct RangeGuardBuilder {
    signature: Signature,
    bounds: Vec<(String, Value, Value)>,
}

impl RangeGuardBuilder {
    /// Constrain a parameter to `[lower, upper]`. Bound order is
    /// normalized, so a reversed pair behaves identically.
    pub fn bound(
        mut self,
        name: impl Into<String>,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Self {
        self.bounds.push((name.into(), lower.into(), upper.into()));
        self
    }

    /// Build the guard, validating every bound against the signature.
    pub fn build(self) -> GuardResult<RangeGuard> {
        let mut bounds = Vec::with_capacity(self.bounds.len());
        for (name, lower, upper) in self.bounds {
            if !self.signature.has_param(&name) {
                return Err(GuardError::unknown_param(name));
            }
            let ordering = match lower.numeric_cmp(&upper) {
                Some(ordering) => ordering,
                None => return Err(GuardError::non_numeric_range(name)),
            };
            let (lower, upper) = if ordering == Ordering::Greater {
                (upper, lower)
            } else {
                (lower, upper)
            };
            bounds.push(Bound { name, lower, upper });
        }
        Ok(RangeGuard {
            signature: self.signature,
            bounds,
        })
    }
}

impl Guard for RangeGuard {
    fn check(&self, args: &Args) -> ValidateResult<()> {
        let bound_args = self.signature.bind(args);
        for bound in &self.bounds {
            let value = match bound_args.get(&bound.name) {
                Some(value) => value,
                None => return Err(ValidateError::missing_argument(&bound.name)),
            };
            match (value.numeric_cmp(&bound.lower), value.numeric_cmp(&bound.upper)) {
                (Some(below), Some(above)) => {
                    if below == Ordering::Less || above == Ordering::Greater {
                        return Err(ValidateError::OutOfRange {
                            name: bound.name.clone(),
                            lower: bound.lower.clone(),
                            upper: bound.upper.clone(),
                            actual: value.clone(),
                        });
                    }
                }
                _ => return Err(ValidateError::not_comparable(&bound.name)),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig() -> Signature {
        Signature::builder().param("x").param("ratio").build().unwrap()
    }

    #[test]
    fn test_inclusive_bounds() {
        let guard = RangeGuard::builder(&sig()).bound("x", 1i64, 10i64).build().unwrap();

        assert!(guard.check(&Args::new().pos(1i64)).is_ok());
        assert!(guard.check(&Args::new().pos(10i64)).is_ok());
        assert!(guard.check(&Args::new().pos(5i64)).is_ok());

        let err = guard.check(&Args::new().pos(11i64)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value for \"x\" must be in the range [1, 10], but got 11"
        );
    }

    #[test]
    fn test_reversed_bounds_are_normalized() {
        // GIVEN bounds supplied in the wrong order
        let reversed = RangeGuard::builder(&sig()).bound("x", 10i64, 1i64).build().unwrap();
        let ordered = RangeGuard::builder(&sig()).bound("x", 1i64, 10i64).build().unwrap();

        // THEN both behave identically
        for value in [0i64, 1, 5, 10, 11] {
            assert_eq!(
                reversed.check(&Args::new().pos(value)).is_ok(),
                ordered.check(&Args::new().pos(value)).is_ok()
            );
        }
    }

    #[test]
    fn test_mixed_numeric_bounds() {
        let guard = RangeGuard::builder(&sig())
            .bound("ratio", 0.0, 1.0)
            .build()
            .unwrap();
        assert!(guard
            .check(&Args::new().kw("ratio", 0.5))
            .is_ok());
        assert!(guard.check(&Args::new().kw("ratio", 1i64)).is_ok());
        assert!(guard.check(&Args::new().kw("ratio", 1.5)).is_err());
    }

    #[test]
    fn test_non_numeric_value_is_not_comparable() {
        let guard = RangeGuard::builder(&sig()).bound("x", 1i64, 10i64).build().unwrap();
        let err = guard.check(&Args::new().pos("five")).unwrap_err();
        assert_eq!(err, ValidateError::not_comparable("x"));
    }

    #[test]
    fn test_construction_errors() {
        let err = RangeGuard::builder(&sig())
            .bound("missing", 1i64, 2i64)
            .build()
            .unwrap_err();
        assert_eq!(err, GuardError::unknown_param("missing"));

        let err = RangeGuard::builder(&sig())
            .bound("x", "a", 2i64)
            .build()
            .unwrap_err();
        assert_eq!(err, GuardError::non_numeric_range("x"));
    }

    #[test]
    fn test_missing_argument() {
        let guard = RangeGuard::builder(&sig()).bound("ratio", 0i64, 1i64).build().unwrap();
        let err = guard.check(&Args::new().pos(5i64)).unwrap_err();
        assert_eq!(err, ValidateError::missing_argument("ratio"));
    }
}
