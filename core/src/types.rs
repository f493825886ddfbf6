//! Runtime type tags.
//!
//! A `TypeName` identifies the runtime type of a [`Value`](crate::Value).
//! Type names double as the vocabulary for type hints: a plain hint wraps a
//! single tag, a parameterized hint wraps a collection tag plus its element
//! hints.

use std::fmt;

/// The runtime type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// The null type.
    Null,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// UTF-8 string.
    Str,
    /// Raw byte string.
    Bytes,
    /// Ordered list.
    List,
    /// Fixed sequence.
    Tuple,
    /// Key/value mapping.
    Map,
}

/// Types that iterate like sequences but are validated as atomic values.
pub const ATOMIC_ITERABLES: &[TypeName] = &[TypeName::Str, TypeName::Bytes];

impl TypeName {
    /// Returns the display name of this type.
    pub fn name(self) -> &'static str {
        match self {
            TypeName::Null => "Null",
            TypeName::Bool => "Bool",
            TypeName::Int => "Int",
            TypeName::Float => "Float",
            TypeName::Str => "Str",
            TypeName::Bytes => "Bytes",
            TypeName::List => "List",
            TypeName::Tuple => "Tuple",
            TypeName::Map => "Map",
        }
    }

    /// Returns true if values of this type support key/value iteration.
    pub fn is_mapping(self) -> bool {
        matches!(self, TypeName::Map)
    }

    /// Returns true if values of this type are ordered sequences.
    ///
    /// `Str` and `Bytes` qualify structurally but are listed in
    /// [`ATOMIC_ITERABLES`] and treated as atomic by the validators.
    pub fn is_sequence(self) -> bool {
        matches!(
            self,
            TypeName::List | TypeName::Tuple | TypeName::Str | TypeName::Bytes
        )
    }

    /// Returns true if this type is validated as an atomic value even
    /// though it iterates like a sequence.
    pub fn is_atomic_iterable(self) -> bool {
        ATOMIC_ITERABLES.contains(&self)
    }

    /// Instance-of test between a hinted type and an actual runtime type.
    ///
    /// `Int` accepts `Bool`, mirroring type systems where booleans are a
    /// subtype of integers; every other pairing is exact.
    pub fn accepts(self, actual: TypeName) -> bool {
        self == actual || (self == TypeName::Int && actual == TypeName::Bool)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
