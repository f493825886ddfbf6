//! Validator trees over type hints.

use crate::describe::describe_value;
use crate::error::{TypeCheckError, TypeCheckResult};
use argus_core::{TypeName, Value};
use std::fmt;

/// A node in a validator tree.
///
/// One validator is built per hint; parameterized hints own one child
/// validator per hint parameter. Validators are immutable after
/// construction and may be shared freely across calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    /// Matches any value.
    Any,
    /// Instance-of check against a single runtime type.
    Instance { base: TypeName },
    /// First-success union over member validators, in declaration order.
    Union { members: Vec<Validator> },
    /// Membership in a set of constant values.
    Literal { allowed: Vec<Value> },
    /// Mapping check, with key/value validators for deep checks when the
    /// hint was parameterized.
    Mapping {
        base: TypeName,
        entry: Option<Box<(Validator, Validator)>>,
    },
    /// Sequence check, with an element validator for deep checks when the
    /// hint was parameterized.
    Sequence {
        base: TypeName,
        element: Option<Box<Validator>>,
    },
}

impl Validator {
    /// Tests a value against this validator.
    ///
    /// With `deep` set, collection validators also check every contained
    /// key/value/element against their sub-validators. Shallow checks
    /// never descend into members; they only test the outer type.
    pub fn validate(&self, value: &Value, deep: bool) -> TypeCheckResult<()> {
        log::trace!("testing {} against {}", value, self);
        match self {
            Validator::Any => Ok(()),
            Validator::Instance { base } => {
                if base.accepts(value.type_of()) {
                    Ok(())
                } else {
                    Err(TypeCheckError::mismatch(base.name(), value.type_name()))
                }
            }
            Validator::Union { members } => {
                for member in members {
                    if member.validate(value, deep).is_ok() {
                        return Ok(());
                    }
                }
                Err(TypeCheckError::mismatch(
                    self.to_string(),
                    describe_value(value, deep),
                ))
            }
            Validator::Literal { allowed } => {
                if allowed.contains(value) {
                    Ok(())
                } else {
                    Err(TypeCheckError::mismatch(
                        self.to_string(),
                        describe_value(value, deep),
                    ))
                }
            }
            Validator::Mapping { entry, .. } => {
                // Basic type checking needs to come before nested checks
                let pairs = match value {
                    Value::Map(pairs) => pairs,
                    _ => {
                        return Err(TypeCheckError::mismatch(
                            self.to_string(),
                            value.to_string(),
                        ))
                    }
                };
                if deep {
                    if let Some(entry) = entry {
                        let (key_validator, value_validator) = entry.as_ref();
                        for (key, val) in pairs {
                            if key_validator.validate(key, deep).is_err()
                                || value_validator.validate(val, deep).is_err()
                            {
                                return Err(TypeCheckError::invalid_entry(self.to_string()));
                            }
                        }
                    }
                }
                Ok(())
            }
            Validator::Sequence { base, element } => {
                let items = match value {
                    Value::List(items) if *base == TypeName::List => items,
                    Value::Tuple(items) if *base == TypeName::Tuple => items,
                    _ => {
                        return Err(TypeCheckError::mismatch(
                            self.to_string(),
                            value.to_string(),
                        ))
                    }
                };
                if deep {
                    if let Some(element) = element {
                        for item in items {
                            if element.validate(item, deep).is_err() {
                                return Err(TypeCheckError::invalid_element(
                                    self.to_string(),
                                    describe_value(item, deep),
                                ));
                            }
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Any => f.write_str("Any"),
            Validator::Instance { base } => f.write_str(base.name()),
            Validator::Union { members } => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            Validator::Literal { allowed } => {
                f.write_str("Literal[")?;
                for (i, value) in allowed.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_str("]")
            }
            Validator::Mapping { base, entry } => {
                write!(f, "{}", base.name())?;
                if let Some(entry) = entry {
                    write!(f, "[{}, {}]", entry.0, entry.1)?;
                }
                Ok(())
            }
            Validator::Sequence { base, element } => {
                write!(f, "{}", base.name())?;
                if let Some(element) = element {
                    write!(f, "[{}]", element)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::build_validator;
    use argus_core::TypeHint;

    fn int() -> TypeHint {
        TypeHint::Plain(TypeName::Int)
    }

    fn string() -> TypeHint {
        TypeHint::Plain(TypeName::Str)
    }

    #[test]
    fn test_instance_validation() {
        let validator = build_validator(&int()).unwrap();
        assert!(validator.validate(&Value::Int(5), false).is_ok());

        let err = validator.validate(&Value::Str("x".into()), false).unwrap_err();
        assert_eq!(err.to_string(), "Expected Int not Str");
    }

    #[test]
    fn test_bool_accepted_where_int_hinted() {
        let validator = build_validator(&int()).unwrap();
        assert!(validator.validate(&Value::Bool(true), false).is_ok());

        let bool_validator = build_validator(&TypeHint::Plain(TypeName::Bool)).unwrap();
        assert!(bool_validator.validate(&Value::Int(1), false).is_err());
    }

    #[test]
    fn test_union_first_success_in_declaration_order() {
        let validator = build_validator(&TypeHint::union([int(), string()])).unwrap();
        assert!(validator.validate(&Value::Int(5), false).is_ok());
        assert!(validator.validate(&Value::Str("x".into()), false).is_ok());

        let err = validator.validate(&Value::Float(1.5), false).unwrap_err();
        assert_eq!(err.to_string(), "Expected Int | Str not Float");
    }

    #[test]
    fn test_literal_membership() {
        let validator =
            build_validator(&TypeHint::literal([Value::Str("r".into()), Value::Str("w".into())]))
                .unwrap();
        assert!(validator.validate(&Value::Str("r".into()), false).is_ok());
        assert!(validator.validate(&Value::Str("x".into()), false).is_err());
        assert!(validator.validate(&Value::Int(1), false).is_err());
    }

    #[test]
    fn test_shallow_never_descends() {
        // GIVEN a List[Int] hint and a list with a non-Int member
        let validator = build_validator(&TypeHint::list_of(int())).unwrap();
        let value = Value::List(vec![Value::Int(1), Value::Str("x".into())]);

        // WHEN checking shallowly
        // THEN only the outer type matters
        assert!(validator.validate(&value, false).is_ok());
        assert!(validator.validate(&Value::Int(1), false).is_err());
    }

    #[test]
    fn test_deep_sequence_check() {
        let validator = build_validator(&TypeHint::list_of(int())).unwrap();
        let good = Value::List(vec![Value::Int(1), Value::Int(2)]);
        let bad = Value::List(vec![Value::Int(1), Value::Str("x".into())]);

        assert!(validator.validate(&good, true).is_ok());
        let err = validator.validate(&bad, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Found an invalid element in the sequence. Expected \"List[Int]\" but got \"Str\""
        );
    }

    #[test]
    fn test_nested_deep_sequence_reports_inner_expectation() {
        // GIVEN a List[List[Int]] hint
        let validator = build_validator(&TypeHint::list_of(TypeHint::list_of(int()))).unwrap();

        // WHEN the inner list holds a stray string
        let value = Value::List(vec![
            Value::List(vec![Value::Int(1), Value::Int(2)]),
            Value::List(vec![Value::Int(3), Value::Str("x".into())]),
        ]);
        let err = validator.validate(&value, true).unwrap_err();

        // THEN the error names the inner hint and the offending element type
        let message = err.to_string();
        assert!(message.contains("List[Int]"), "unexpected message: {}", message);
        assert!(message.contains("Str"), "unexpected message: {}", message);
    }

    #[test]
    fn test_deep_mapping_check() {
        // Map[Int | Str, List[Int | Str]]
        let validator = build_validator(&TypeHint::map_of(
            TypeHint::union([int(), string()]),
            TypeHint::list_of(TypeHint::union([int(), string()])),
        ))
        .unwrap();

        let good = Value::Map(vec![(
            Value::Str("a".into()),
            Value::List(vec![Value::Int(1), Value::Str("b".into())]),
        )]);
        assert!(validator.validate(&good, true).is_ok());

        let bad_key = Value::Map(vec![(Value::Float(3.5), Value::List(vec![Value::Int(1)]))]);
        let err = validator.validate(&bad_key, true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Found an invalid entry in the mapping. Expected \"Map[Int | Str, List[Int | Str]]\""
        );
    }

    #[test]
    fn test_mapping_outer_mismatch_shows_value() {
        let validator = build_validator(&TypeHint::map_of(int(), string())).unwrap();
        let err = validator.validate(&Value::Int(7), false).unwrap_err();
        assert_eq!(err.to_string(), "Expected Map[Int, Str] not 7");
    }

    #[test]
    fn test_unparameterized_collection_is_shallow_only() {
        let validator = build_validator(&TypeHint::Plain(TypeName::List)).unwrap();
        let mixed = Value::List(vec![Value::Int(1), Value::Str("x".into())]);
        // No element hint, so deep checking has nothing to test
        assert!(validator.validate(&mixed, true).is_ok());
    }

    #[test]
    fn test_any_accepts_everything() {
        let validator = build_validator(&TypeHint::Any).unwrap();
        assert!(validator.validate(&Value::Null, true).is_ok());
        assert!(validator.validate(&Value::Int(1), false).is_ok());
        assert!(validator
            .validate(&Value::List(vec![Value::Null]), true)
            .is_ok());
    }

    #[test]
    fn test_tuple_and_list_are_distinct_sequences() {
        let validator = build_validator(&TypeHint::tuple_of(int())).unwrap();
        assert!(validator
            .validate(&Value::tuple([Value::Int(1)]), true)
            .is_ok());
        assert!(validator
            .validate(&Value::List(vec![Value::Int(1)]), true)
            .is_err());
    }

    #[test]
    fn test_display_descriptions() {
        let validator = build_validator(&TypeHint::map_of(
            TypeHint::union([int(), string()]),
            TypeHint::list_of(int()),
        ))
        .unwrap();
        assert_eq!(validator.to_string(), "Map[Int | Str, List[Int]]");
    }
}
