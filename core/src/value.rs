//! Value types for guarded arguments.
//!
//! Values are the dynamic data supplied to a guarded call. Argus supports
//! scalar types (Null, Bool, Int, Float, Str, Bytes) and collection types
//! (List, Tuple, Map).

use crate::TypeName;
use std::cmp::Ordering;
use std::fmt;

/// A value supplied as an argument to a guarded call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Raw byte string.
    Bytes(Vec<u8>),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Fixed sequence of values.
    Tuple(Vec<Value>),
    /// Insertion-ordered key/value pairs.
    Map(Vec<(Value, Value)>),
}

impl Value {
    /// Build a tuple value.
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// Build a byte-string value.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(bytes.into())
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is an Int or Float value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns true if this is a byte-string value.
    pub fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    /// Returns true if this is a list value.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this is a tuple value.
    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    /// Returns true if this is a map value.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a Str value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as byte slice if this is a Bytes value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get as item slice if this is a List or Tuple value.
    pub fn as_items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Get as key/value pairs if this is a Map value.
    pub fn as_pairs(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Returns the runtime type of this value.
    pub fn type_of(&self) -> TypeName {
        match self {
            Value::Null => TypeName::Null,
            Value::Bool(_) => TypeName::Bool,
            Value::Int(_) => TypeName::Int,
            Value::Float(_) => TypeName::Float,
            Value::Str(_) => TypeName::Str,
            Value::Bytes(_) => TypeName::Bytes,
            Value::List(_) => TypeName::List,
            Value::Tuple(_) => TypeName::Tuple,
            Value::Map(_) => TypeName::Map,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        self.type_of().name()
    }

    /// Truthiness used by expression guards. Null, false, zero, and empty
    /// collections are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Bytes(b) => !b.is_empty(),
            Value::List(items) | Value::Tuple(items) => !items.is_empty(),
            Value::Map(pairs) => !pairs.is_empty(),
        }
    }

    /// Compare numerically against another value. Returns None when either
    /// side is not a number (bools do not count as numbers here).
    pub fn numeric_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }

    /// Returns true if this value supports membership testing.
    pub fn supports_membership(&self) -> bool {
        matches!(
            self,
            Value::Str(_) | Value::List(_) | Value::Tuple(_) | Value::Map(_)
        )
    }

    /// Membership test: element for sequences, key for maps, substring for
    /// strings. Returns false for unsupported combinations.
    pub fn contains(&self, needle: &Value) -> bool {
        match self {
            Value::List(items) | Value::Tuple(items) => items.contains(needle),
            Value::Map(pairs) => pairs.iter().any(|(key, _)| key == needle),
            Value::Str(s) => match needle {
                Value::Str(sub) => s.contains(sub.as_str()),
                _ => false,
            },
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Bytes(b) => write!(f, "b({} bytes)", b.len()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<(Value, Value)>> for Value {
    fn from(pairs: Vec<(Value, Value)>) -> Self {
        Value::Map(pairs)
    }
}

/// Helper macro to create keyword-argument maps.
#[macro_export]
macro_rules! args {
    () => {
        Vec::<(String, $crate::Value)>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut pairs = Vec::new();
            $(
                pairs.push(($key.to_string(), $crate::Value::from($value)));
            )+
            pairs
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_checks() {
        assert!(Value::Null.is_null());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::Int(42).is_int());
        assert!(Value::Float(3.14).is_float());
        assert!(Value::Str("hello".into()).is_str());
        assert!(Value::bytes(vec![1u8, 2]).is_bytes());
        assert!(Value::List(vec![]).is_list());
        assert!(Value::tuple([Value::Int(1)]).is_tuple());
        assert!(Value::Map(vec![]).is_map());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Float(3.14).as_float(), Some(3.14));
        assert_eq!(Value::Str("hello".into()).as_str(), Some("hello"));
        assert_eq!(Value::Int(42).as_str(), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Str(String::new()).is_truthy());
        assert!(!Value::List(vec![]).is_truthy());
        assert!(Value::Int(-1).is_truthy());
        assert!(Value::Str("x".into()).is_truthy());
        assert!(Value::List(vec![Value::Null]).is_truthy());
    }

    #[test]
    fn test_numeric_cmp() {
        assert_eq!(
            Value::Int(1).numeric_cmp(&Value::Int(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Int(2).numeric_cmp(&Value::Float(2.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::Float(2.5).numeric_cmp(&Value::Int(2)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::Str("a".into()).numeric_cmp(&Value::Int(1)), None);
        assert_eq!(Value::Bool(true).numeric_cmp(&Value::Int(1)), None);
    }

    #[test]
    fn test_contains() {
        let list = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert!(list.contains(&Value::Int(2)));
        assert!(!list.contains(&Value::Int(3)));

        let map = Value::Map(vec![(Value::Str("k".into()), Value::Int(1))]);
        assert!(map.contains(&Value::Str("k".into())));
        assert!(!map.contains(&Value::Int(1)));

        let text = Value::Str("hello".into());
        assert!(text.contains(&Value::Str("ell".into())));
        assert!(!text.contains(&Value::Int(1)));

        assert!(!Value::Int(5).supports_membership());
        assert!(map.supports_membership());
    }

    #[test]
    fn test_display() {
        let value = Value::Map(vec![(
            Value::Str("xs".into()),
            Value::List(vec![Value::Int(1), Value::Float(2.5)]),
        )]);
        assert_eq!(value.to_string(), "{\"xs\": [1, 2.5]}");
        assert_eq!(Value::tuple([Value::Int(1), Value::Int(2)]).to_string(), "(1, 2)");
    }

    #[test]
    fn test_args_macro() {
        let empty: Vec<(String, Value)> = args!();
        assert!(empty.is_empty());

        let pairs = args! {
            "name" => "Alice",
            "age" => 30i64,
            "active" => true,
        };
        assert_eq!(pairs[0], ("name".to_string(), Value::Str("Alice".into())));
        assert_eq!(pairs[1], ("age".to_string(), Value::Int(30)));
        assert_eq!(pairs[2], ("active".to_string(), Value::Bool(true)));
    }
}
