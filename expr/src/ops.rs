//! Operator absorption for the placeholder and expression nodes.
//!
//! Every supported operation applied to `X` or an `Expr` returns a new
//! `Expr` node instead of computing. Rust operators cover the arithmetic
//! and bitwise forms; comparisons and the remaining operations are named
//! builders. Operations that cannot be deferred fail here, when the
//! expression is composed.

use crate::error::{BuildError, BuildResult};
use crate::expr::{Expr, Op, Operand, X};
use std::ops;

/// Builder operations shared by the placeholder and expression nodes.
pub trait Absorb: Into<Operand> + Sized {
    /// Defers an equality test.
    fn equals(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::Eq, self.into(), rhs.into())
    }

    /// Defers an inequality test.
    fn not_equals(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::Ne, self.into(), rhs.into())
    }

    /// Defers a `<` comparison.
    fn less_than(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::Lt, self.into(), rhs.into())
    }

    /// Defers a `<=` comparison.
    fn less_or_equal(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::Le, self.into(), rhs.into())
    }

    /// Defers a `>` comparison.
    fn greater_than(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::Gt, self.into(), rhs.into())
    }

    /// Defers a `>=` comparison.
    fn greater_or_equal(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::Ge, self.into(), rhs.into())
    }

    /// Defers a floor division.
    fn floor_div(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::FloorDiv, self.into(), rhs.into())
    }

    /// Defers an exponentiation.
    fn pow(self, rhs: impl Into<Operand>) -> Expr {
        Expr::binary(Op::Pow, self.into(), rhs.into())
    }

    /// Defers a field fetch from the substituted value.
    fn attr(self, name: impl Into<String>) -> Expr {
        Expr::Attr {
            name: name.into(),
            object: self.into(),
        }
    }

    /// Defers a built-in method call on the substituted value.
    fn call(self, name: impl Into<String>, args: Vec<Operand>) -> Expr {
        Expr::Call {
            name: name.into(),
            receiver: self.into(),
            args,
        }
    }

    /// Length queries cannot be deferred.
    fn len(self) -> BuildResult<Expr> {
        Err(BuildError::unsupported("len()"))
    }

    /// Containment tests cannot be deferred.
    fn contains(self, _rhs: impl Into<Operand>) -> BuildResult<Expr> {
        Err(BuildError::unsupported("the \"in\" operator"))
    }

    /// Boolean conjunction cannot be deferred; use bitwise `&` on
    /// boolean-valued subexpressions instead.
    fn and(self, _rhs: impl Into<Operand>) -> BuildResult<Expr> {
        Err(BuildError::unsupported("boolean \"and\""))
    }

    /// Boolean disjunction cannot be deferred; use bitwise `|` on
    /// boolean-valued subexpressions instead.
    fn or(self, _rhs: impl Into<Operand>) -> BuildResult<Expr> {
        Err(BuildError::unsupported("boolean \"or\""))
    }
}

impl Absorb for X {}
impl Absorb for Expr {}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<R: Into<Operand>> ops::$trait<R> for X {
            type Output = Expr;
            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, Operand::Placeholder, rhs.into())
            }
        }

        impl<R: Into<Operand>> ops::$trait<R> for Expr {
            type Output = Expr;
            fn $method(self, rhs: R) -> Expr {
                Expr::binary($op, self, rhs.into())
            }
        }
    };
}

impl_binary_op!(Add, add, Op::Add);
impl_binary_op!(Sub, sub, Op::Sub);
impl_binary_op!(Mul, mul, Op::Mul);
impl_binary_op!(Div, div, Op::Div);
impl_binary_op!(Rem, rem, Op::Mod);
impl_binary_op!(BitAnd, bitand, Op::BitAnd);
impl_binary_op!(BitOr, bitor, Op::BitOr);
impl_binary_op!(BitXor, bitxor, Op::BitXor);
impl_binary_op!(Shl, shl, Op::Shl);
impl_binary_op!(Shr, shr, Op::Shr);

impl ops::Not for X {
    type Output = Expr;
    fn not(self) -> Expr {
        Expr::unary(Op::BitNot, Operand::Placeholder)
    }
}

impl ops::Not for Expr {
    type Output = Expr;
    fn not(self) -> Expr {
        Expr::unary(Op::BitNot, self)
    }
}

// Reflected forms, for when the placeholder is the right operand.
macro_rules! impl_reflected_op {
    ($lhs:ty, $(($trait:ident, $method:ident, $op:expr)),+ $(,)?) => {
        $(
            impl ops::$trait<X> for $lhs {
                type Output = Expr;
                fn $method(self, _rhs: X) -> Expr {
                    Expr::binary($op, Operand::from(self), Operand::Placeholder)
                }
            }

            impl ops::$trait<Expr> for $lhs {
                type Output = Expr;
                fn $method(self, rhs: Expr) -> Expr {
                    Expr::binary($op, Operand::from(self), rhs)
                }
            }
        )+
    };
}

impl_reflected_op!(
    i64,
    (Add, add, Op::Add),
    (Sub, sub, Op::Sub),
    (Mul, mul, Op::Mul),
    (Div, div, Op::Div),
    (Rem, rem, Op::Mod),
    (BitAnd, bitand, Op::BitAnd),
    (BitOr, bitor, Op::BitOr),
    (BitXor, bitxor, Op::BitXor),
    (Shl, shl, Op::Shl),
    (Shr, shr, Op::Shr),
);

impl_reflected_op!(
    f64,
    (Add, add, Op::Add),
    (Sub, sub, Op::Sub),
    (Mul, mul, Op::Mul),
    (Div, div, Op::Div),
);

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::Value;

    #[test]
    fn test_unsupported_operations_fail_at_build_time() {
        assert_eq!(
            X.len().unwrap_err(),
            BuildError::unsupported("len()")
        );
        assert!(X.contains(5).is_err());
        assert!(X.and(true).is_err());
        assert!(X.or(false).is_err());

        // Same rejection on composed nodes, before any substitution
        let node = X + 1;
        assert!(node.len().is_err());
    }

    #[test]
    fn test_bitwise_sugar() {
        let expr = (X & 0xF0) >> 4;
        assert_eq!(expr.substitute(&Value::Int(0xAB)).unwrap(), Value::Int(0xA));

        let expr = !X;
        assert_eq!(expr.substitute(&Value::Int(-1)).unwrap(), Value::Int(0));
    }

    #[test]
    fn test_modulo_sugar() {
        let expr = (X % 2).equals(0);
        assert_eq!(expr.substitute(&Value::Int(4)).unwrap(), Value::Bool(true));
        assert_eq!(expr.substitute(&Value::Int(5)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_named_builders_mirror_operator_sugar() {
        let sugar = X + 5;
        let named = Expr::binary(Op::Add, X, 5);
        assert_eq!(sugar, named);

        let expr = X.floor_div(2);
        assert_eq!(expr.substitute(&Value::Int(7)).unwrap(), Value::Int(3));

        let expr = X.pow(2);
        assert_eq!(expr.substitute(&Value::Int(9)).unwrap(), Value::Int(81));
    }

    #[test]
    fn test_constant_receiver_via_node_constructor() {
        // 2 ** X, the reflected form with the placeholder on the right
        let expr = Expr::binary(Op::Pow, 2, X);
        assert_eq!(expr.substitute(&Value::Int(10)).unwrap(), Value::Int(1024));
    }
}
