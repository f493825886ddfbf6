//! Type-hint annotations.
//!
//! A hint describes the expected type of one parameter. Hints may be
//! parameterized ("List of Int") and nest arbitrarily. Hints are plain
//! data; the typecheck crate turns them into validator trees.

use crate::{TypeName, Value};
use std::fmt;

/// A declared type constraint on a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeHint {
    /// Matches any value.
    Any,
    /// Matches when at least one member hint matches, tried in order.
    Union(Vec<TypeHint>),
    /// Matches exactly the listed constant values.
    Literal(Vec<Value>),
    /// An unparameterized runtime type.
    Plain(TypeName),
    /// A collection type with element hints, e.g. "List[Int]".
    Parameterized(TypeName, Vec<TypeHint>),
}

impl TypeHint {
    /// Union over member hints, tried in declaration order.
    pub fn union(members: impl IntoIterator<Item = TypeHint>) -> Self {
        TypeHint::Union(members.into_iter().collect())
    }

    /// Set of allowed constant values.
    pub fn literal(values: impl IntoIterator<Item = Value>) -> Self {
        TypeHint::Literal(values.into_iter().collect())
    }

    /// A list with homogeneous elements.
    pub fn list_of(element: TypeHint) -> Self {
        TypeHint::Parameterized(TypeName::List, vec![element])
    }

    /// A tuple with homogeneous elements.
    pub fn tuple_of(element: TypeHint) -> Self {
        TypeHint::Parameterized(TypeName::Tuple, vec![element])
    }

    /// A map with hinted keys and values.
    pub fn map_of(key: TypeHint, value: TypeHint) -> Self {
        TypeHint::Parameterized(TypeName::Map, vec![key, value])
    }

    /// The uninstantiated origin type, or None for the special markers.
    pub fn base(&self) -> Option<TypeName> {
        match self {
            TypeHint::Plain(name) | TypeHint::Parameterized(name, _) => Some(*name),
            _ => None,
        }
    }

    /// Sub-annotations carried by this hint.
    pub fn params(&self) -> &[TypeHint] {
        match self {
            TypeHint::Union(members) => members,
            TypeHint::Parameterized(_, params) => params,
            _ => &[],
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeHint::Any => f.write_str("Any"),
            TypeHint::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            TypeHint::Literal(values) => {
                f.write_str("Literal[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            TypeHint::Plain(name) => write!(f, "{}", name),
            TypeHint::Parameterized(name, params) => {
                write!(f, "{}[", name)?;
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", param)?;
                }
                f.write_str("]")
            }
        }
    }
}
