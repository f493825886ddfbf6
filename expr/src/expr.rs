//! Deferred expression trees.
//!
//! An expression tree is built once, when calling code composes a
//! predicate from the placeholder, and evaluated any number of times by
//! substituting a concrete value for the placeholder.

use crate::error::EvalResult;
use crate::eval::{apply_op, call_method, get_attr};
use argus_core::Value;

/// Symbolic stand-in for the value substituted at evaluation time.
///
/// Operations applied to `X` build [`Expr`] nodes instead of computing.
/// Arithmetic and bitwise operators absorb directly; comparisons and the
/// remaining operations use the named builders on [`Absorb`](crate::Absorb).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X;

/// Operation performed by an expression node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Mod,
    Pow,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    BitNot,
}

/// One operand of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// The placeholder marker, replaced by the substituted value.
    Placeholder,
    /// A constant captured when the expression was built.
    Const(Value),
    /// A nested expression node.
    Node(Box<Expr>),
}

impl Operand {
    fn substitute(&self, value: &Value) -> EvalResult<Value> {
        match self {
            Operand::Placeholder => Ok(value.clone()),
            Operand::Const(constant) => Ok(constant.clone()),
            Operand::Node(node) => node.substitute(value),
        }
    }
}

impl From<X> for Operand {
    fn from(_: X) -> Self {
        Operand::Placeholder
    }
}

impl From<Expr> for Operand {
    fn from(node: Expr) -> Self {
        Operand::Node(Box::new(node))
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Const(value)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Const(Value::Bool(b))
    }
}

impl From<i64> for Operand {
    fn from(i: i64) -> Self {
        Operand::Const(Value::Int(i))
    }
}

impl From<i32> for Operand {
    fn from(i: i32) -> Self {
        Operand::Const(Value::Int(i as i64))
    }
}

impl From<f64> for Operand {
    fn from(f: f64) -> Self {
        Operand::Const(Value::Float(f))
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Const(Value::Str(s.to_string()))
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Const(Value::Str(s))
    }
}

/// A node in a deferred expression tree.
///
/// Nodes form a tree by construction: each node owns its operands, and
/// operands are only ever constants, nested nodes, or the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An operator applied to evaluated operands; the first operand is
    /// the receiver.
    Op { op: Op, operands: Vec<Operand> },
    /// Fetch a named field from the evaluated receiver.
    Attr { name: String, object: Operand },
    /// Invoke a named built-in method on the evaluated receiver.
    Call {
        name: String,
        receiver: Operand,
        args: Vec<Operand>,
    },
}

impl Expr {
    /// Build a binary node directly. The named builders and operator
    /// sugar cover the placeholder-receiver forms; this constructor also
    /// admits a constant receiver, e.g. `2 ** X`.
    pub fn binary(op: Op, lhs: impl Into<Operand>, rhs: impl Into<Operand>) -> Expr {
        Expr::Op {
            op,
            operands: vec![lhs.into(), rhs.into()],
        }
    }

    /// Build a unary node directly.
    pub fn unary(op: Op, operand: impl Into<Operand>) -> Expr {
        Expr::Op {
            op,
            operands: vec![operand.into()],
        }
    }

    /// Substitutes a value for every placeholder and evaluates the tree.
    ///
    /// Substitution never mutates the tree; it may be repeated any number
    /// of times with different values.
    pub fn substitute(&self, value: &Value) -> EvalResult<Value> {
        match self {
            Expr::Op { op, operands } => {
                let mut evaluated = Vec::with_capacity(operands.len());
                for operand in operands {
                    evaluated.push(operand.substitute(value)?);
                }
                apply_op(*op, &evaluated)
            }
            Expr::Attr { name, object } => {
                let object = object.substitute(value)?;
                get_attr(&object, name)
            }
            Expr::Call {
                name,
                receiver,
                args,
            } => {
                let receiver = receiver.substitute(value)?;
                let mut evaluated = Vec::with_capacity(args.len());
                for arg in args {
                    evaluated.push(arg.substitute(value)?);
                }
                call_method(&receiver, name, &evaluated)
            }
        }
    }
}
