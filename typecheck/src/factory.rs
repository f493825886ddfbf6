//! Validator construction from type hints.

use crate::error::{HintError, HintResult};
use crate::validator::Validator;
use argus_core::{TypeHint, TypeName};

/// Builds the validator tree for a type hint.
///
/// Dispatches on the hint's structural category, first match wins: the
/// special markers (Any, Union, Literal), then mapping capability, then
/// sequence capability, then a plain instance check. Unsupported hints
/// fail here, at construction time, never at call time.
pub fn build_validator(hint: &TypeHint) -> HintResult<Validator> {
    match hint {
        TypeHint::Any => Ok(Validator::Any),
        TypeHint::Union(members) => {
            if members.is_empty() {
                return Err(HintError::EmptyUnion);
            }
            let members = members
                .iter()
                .map(build_validator)
                .collect::<HintResult<Vec<_>>>()?;
            Ok(Validator::Union { members })
        }
        TypeHint::Literal(values) => {
            if values.is_empty() {
                return Err(HintError::EmptyLiteral);
            }
            Ok(Validator::Literal {
                allowed: values.clone(),
            })
        }
        TypeHint::Plain(base) => Ok(plain_validator(*base)),
        TypeHint::Parameterized(base, params) => parameterized_validator(hint, *base, params),
    }
}

/// Validator for an unparameterized runtime type.
///
/// Collection types get shallow-only collection validators. Str and Bytes
/// iterate like sequences but are validated as atomic values.
fn plain_validator(base: TypeName) -> Validator {
    if base.is_atomic_iterable() {
        Validator::Instance { base }
    } else if base.is_mapping() {
        Validator::Mapping { base, entry: None }
    } else if base.is_sequence() {
        Validator::Sequence {
            base,
            element: None,
        }
    } else {
        Validator::Instance { base }
    }
}

fn parameterized_validator(
    hint: &TypeHint,
    base: TypeName,
    params: &[TypeHint],
) -> HintResult<Validator> {
    // Parameterizing a scalar or atomic-iterable type has no runtime
    // instance-of meaning.
    if base.is_atomic_iterable() || !(base.is_mapping() || base.is_sequence()) {
        return Err(HintError::unsupported(hint));
    }
    if base.is_mapping() {
        if params.len() != 2 {
            return Err(HintError::wrong_arity(base, 2, params.len()));
        }
        let key = build_validator(&params[0])?;
        let value = build_validator(&params[1])?;
        Ok(Validator::Mapping {
            base,
            entry: Some(Box::new((key, value))),
        })
    } else {
        if params.len() != 1 {
            return Err(HintError::wrong_arity(base, 1, params.len()));
        }
        let element = build_validator(&params[0])?;
        Ok(Validator::Sequence {
            base,
            element: Some(Box::new(element)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_to_variants() {
        assert_eq!(build_validator(&TypeHint::Any).unwrap(), Validator::Any);
        assert!(matches!(
            build_validator(&TypeHint::Plain(TypeName::Int)).unwrap(),
            Validator::Instance {
                base: TypeName::Int
            }
        ));
        assert!(matches!(
            build_validator(&TypeHint::Plain(TypeName::Map)).unwrap(),
            Validator::Mapping { entry: None, .. }
        ));
        assert!(matches!(
            build_validator(&TypeHint::Plain(TypeName::List)).unwrap(),
            Validator::Sequence { element: None, .. }
        ));
    }

    #[test]
    fn test_atomic_iterables_dispatch_to_instance() {
        // Str and Bytes iterate like sequences but must be treated as atomic
        assert!(matches!(
            build_validator(&TypeHint::Plain(TypeName::Str)).unwrap(),
            Validator::Instance {
                base: TypeName::Str
            }
        ));
        assert!(matches!(
            build_validator(&TypeHint::Plain(TypeName::Bytes)).unwrap(),
            Validator::Instance {
                base: TypeName::Bytes
            }
        ));
    }

    #[test]
    fn test_parameterized_scalar_fails_construction() {
        let hint = TypeHint::Parameterized(TypeName::Int, vec![TypeHint::Any]);
        let err = build_validator(&hint).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Type hint validation for \"Int[Any]\" is not supported"
        );

        let hint = TypeHint::Parameterized(TypeName::Str, vec![TypeHint::Any]);
        assert!(build_validator(&hint).is_err());
    }

    #[test]
    fn test_wrong_arity_fails_construction() {
        let hint = TypeHint::Parameterized(TypeName::Map, vec![TypeHint::Any]);
        assert_eq!(
            build_validator(&hint).unwrap_err(),
            HintError::wrong_arity(TypeName::Map, 2, 1)
        );

        let hint = TypeHint::Parameterized(TypeName::List, vec![TypeHint::Any, TypeHint::Any]);
        assert_eq!(
            build_validator(&hint).unwrap_err(),
            HintError::wrong_arity(TypeName::List, 1, 2)
        );
    }

    #[test]
    fn test_empty_union_and_literal_fail_construction() {
        assert_eq!(
            build_validator(&TypeHint::Union(vec![])).unwrap_err(),
            HintError::EmptyUnion
        );
        assert_eq!(
            build_validator(&TypeHint::Literal(vec![])).unwrap_err(),
            HintError::EmptyLiteral
        );
    }

    #[test]
    fn test_nested_construction_failure_propagates() {
        let hint = TypeHint::list_of(TypeHint::Parameterized(TypeName::Int, vec![TypeHint::Any]));
        assert!(build_validator(&hint).is_err());
    }
}
