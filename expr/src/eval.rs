//! Evaluation of expression operations over values.
//!
//! The first operand of every operation is the receiver. Numeric
//! operands promote Int to Float when mixed; division always yields a
//! Float, floor division and modulo keep integers.

use crate::error::{EvalError, EvalResult};
use crate::expr::Op;
use argus_core::Value;
use std::cmp::Ordering;

pub(crate) fn apply_op(op: Op, operands: &[Value]) -> EvalResult<Value> {
    if let Op::BitNot = op {
        let operand = operands
            .first()
            .ok_or_else(|| EvalError::type_error("missing operand"))?;
        return eval_bit_not(operand);
    }

    let (left, right) = match operands {
        [left, right] => (left, right),
        _ => return Err(EvalError::type_error("operator expects two operands")),
    };

    match op {
        Op::Eq => Ok(Value::Bool(values_equal(left, right))),
        Op::Ne => Ok(Value::Bool(!values_equal(left, right))),
        Op::Lt => compare(left, right, "<", |ordering| ordering == Ordering::Less),
        Op::Le => compare(left, right, "<=", |ordering| ordering != Ordering::Greater),
        Op::Gt => compare(left, right, ">", |ordering| ordering == Ordering::Greater),
        Op::Ge => compare(left, right, ">=", |ordering| ordering != Ordering::Less),

        Op::Add => eval_add(left, right),
        Op::Sub => eval_sub(left, right),
        Op::Mul => eval_mul(left, right),
        Op::Div => eval_div(left, right),
        Op::FloorDiv => eval_floor_div(left, right),
        Op::Mod => eval_mod(left, right),
        Op::Pow => eval_pow(left, right),

        Op::BitAnd => eval_bit_and(left, right),
        Op::BitOr => eval_bit_or(left, right),
        Op::BitXor => eval_bit_xor(left, right),
        Op::Shl => eval_shift(left, right, "<<", i64::checked_shl),
        Op::Shr => eval_shift(left, right, ">>", i64::checked_shr),
        Op::BitNot => unreachable!("handled above"),
    }
}

// ========== Comparison helpers ==========

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => (*a as f64) == *b,
        _ => left == right,
    }
}

fn compare(
    left: &Value,
    right: &Value,
    symbol: &str,
    test: impl Fn(Ordering) -> bool,
) -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Str(a), Value::Str(b)) => a.cmp(b),
        (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
        _ => left.numeric_cmp(right).ok_or_else(|| {
            EvalError::type_error(format!("cannot compare {} {} {}", left, symbol, right))
        })?,
    };
    Ok(Value::Bool(test(ordering)))
}

// ========== Arithmetic helpers ==========

fn eval_add(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a + b)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 + b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + *b as f64)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{}{}", a, b))),
        (Value::Bytes(a), Value::Bytes(b)) => {
            let mut joined = a.clone();
            joined.extend_from_slice(b);
            Ok(Value::Bytes(joined))
        }
        (Value::List(a), Value::List(b)) => {
            let mut joined = a.clone();
            joined.extend(b.iter().cloned());
            Ok(Value::List(joined))
        }
        (Value::Tuple(a), Value::Tuple(b)) => {
            let mut joined = a.clone();
            joined.extend(b.iter().cloned());
            Ok(Value::Tuple(joined))
        }
        _ => Err(EvalError::type_error(format!(
            "cannot add {} and {}",
            left, right
        ))),
    }
}

fn eval_sub(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a - b)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a - b)),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 - b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a - *b as f64)),
        _ => Err(EvalError::type_error(format!(
            "cannot subtract {} and {}",
            left, right
        ))),
    }
}

fn eval_mul(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a * b)),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a * b)),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float(*a as f64 * b)),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a * *b as f64)),
        _ => Err(EvalError::type_error(format!(
            "cannot multiply {} and {}",
            left, right
        ))),
    }
}

/// True division: always yields a Float, even for integer operands.
fn eval_div(left: &Value, right: &Value) -> EvalResult<Value> {
    let (a, b) = numeric_pair(left, right, "divide")?;
    if b == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Float(a / b))
}

/// Floor division: integer operands stay integers.
fn eval_floor_div(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => {
            if *b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Value::Int(a.div_euclid(*b)))
            }
        }
        _ => {
            let (a, b) = numeric_pair(left, right, "floor-divide")?;
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(Value::Float((a / b).floor()))
        }
    }
}

fn eval_mod(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => {
            if *b == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(Value::Int(a.rem_euclid(*b)))
            }
        }
        _ => Err(EvalError::type_error(format!(
            "cannot mod {} and {}",
            left, right
        ))),
    }
}

fn eval_pow(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        // Negative integer exponents fall back to a float result
        (Value::Int(a), Value::Int(b)) if *b >= 0 => u32::try_from(*b)
            .ok()
            .and_then(|exponent| a.checked_pow(exponent))
            .map(Value::Int)
            .ok_or_else(|| EvalError::overflow("pow")),
        (Value::Int(a), Value::Int(b)) => Ok(Value::Float((*a as f64).powi(*b as i32))),
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a.powf(*b))),
        (Value::Int(a), Value::Float(b)) => Ok(Value::Float((*a as f64).powf(*b))),
        (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a.powi(*b as i32))),
        _ => Err(EvalError::type_error(format!(
            "cannot raise {} to {}",
            left, right
        ))),
    }
}

fn numeric_pair(left: &Value, right: &Value, verb: &str) -> EvalResult<(f64, f64)> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok((*a as f64, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Ok((*a, *b)),
        (Value::Int(a), Value::Float(b)) => Ok((*a as f64, *b)),
        (Value::Float(a), Value::Int(b)) => Ok((*a, *b as f64)),
        _ => Err(EvalError::type_error(format!(
            "cannot {} {} and {}",
            verb, left, right
        ))),
    }
}

// ========== Bitwise helpers ==========

fn eval_bit_and(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a & b)),
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a & b)),
        _ => Err(EvalError::type_error(format!(
            "cannot and {} and {}",
            left, right
        ))),
    }
}

fn eval_bit_or(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a | b)),
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a | b)),
        _ => Err(EvalError::type_error(format!(
            "cannot or {} and {}",
            left, right
        ))),
    }
}

fn eval_bit_xor(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(a ^ b)),
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a ^ b)),
        _ => Err(EvalError::type_error(format!(
            "cannot xor {} and {}",
            left, right
        ))),
    }
}

fn eval_shift(
    left: &Value,
    right: &Value,
    symbol: &str,
    shift: impl Fn(i64, u32) -> Option<i64>,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => u32::try_from(*b)
            .ok()
            .and_then(|amount| shift(*a, amount))
            .map(Value::Int)
            .ok_or_else(|| EvalError::type_error(format!("invalid shift amount {}", b))),
        _ => Err(EvalError::type_error(format!(
            "cannot shift {} {} {}",
            left, symbol, right
        ))),
    }
}

fn eval_bit_not(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Int(i) => Ok(Value::Int(!i)),
        _ => Err(EvalError::type_error(format!("cannot invert {}", operand))),
    }
}

// ========== Attribute and method helpers ==========

pub(crate) fn get_attr(object: &Value, name: &str) -> EvalResult<Value> {
    match object {
        Value::Map(pairs) => pairs
            .iter()
            .find(|(key, _)| matches!(key, Value::Str(s) if s == name))
            .map(|(_, field)| field.clone())
            .ok_or_else(|| EvalError::unknown_attribute(name, object.type_name())),
        _ => Err(EvalError::type_error(format!(
            "cannot access attribute '{}' on {}",
            name,
            object.type_name()
        ))),
    }
}

pub(crate) fn call_method(receiver: &Value, name: &str, args: &[Value]) -> EvalResult<Value> {
    match name {
        "abs" => match receiver {
            Value::Int(i) => Ok(Value::Int(i.abs())),
            Value::Float(f) => Ok(Value::Float(f.abs())),
            _ => Err(EvalError::type_error("abs expects a numeric receiver")),
        },
        "floor" => match receiver {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(f) => Ok(Value::Float(f.floor())),
            _ => Err(EvalError::type_error("floor expects a numeric receiver")),
        },
        "ceil" => match receiver {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(f) => Ok(Value::Float(f.ceil())),
            _ => Err(EvalError::type_error("ceil expects a numeric receiver")),
        },
        "round" => match receiver {
            Value::Int(i) => Ok(Value::Int(*i)),
            Value::Float(f) => Ok(Value::Float(f.round())),
            _ => Err(EvalError::type_error("round expects a numeric receiver")),
        },
        "upper" => match receiver {
            Value::Str(s) => Ok(Value::Str(s.to_uppercase())),
            _ => Err(EvalError::type_error("upper expects a string receiver")),
        },
        "lower" => match receiver {
            Value::Str(s) => Ok(Value::Str(s.to_lowercase())),
            _ => Err(EvalError::type_error("lower expects a string receiver")),
        },
        "trim" => match receiver {
            Value::Str(s) => Ok(Value::Str(s.trim().to_string())),
            _ => Err(EvalError::type_error("trim expects a string receiver")),
        },
        "starts_with" => match (receiver, args) {
            (Value::Str(s), [Value::Str(prefix)]) => {
                Ok(Value::Bool(s.starts_with(prefix.as_str())))
            }
            _ => Err(EvalError::type_error(
                "starts_with expects a string receiver and prefix",
            )),
        },
        "ends_with" => match (receiver, args) {
            (Value::Str(s), [Value::Str(suffix)]) => {
                Ok(Value::Bool(s.ends_with(suffix.as_str())))
            }
            _ => Err(EvalError::type_error(
                "ends_with expects a string receiver and suffix",
            )),
        },
        "replace" => match (receiver, args) {
            (Value::Str(s), [Value::Str(from), Value::Str(to)]) => {
                Ok(Value::Str(s.replace(from.as_str(), to)))
            }
            _ => Err(EvalError::type_error(
                "replace expects a string receiver and (from, to)",
            )),
        },
        _ => Err(EvalError::unknown_method(name)),
    }
}
