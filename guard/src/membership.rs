//! Membership guard.

use crate::error::{GuardError, GuardResult, ValidateError, ValidateResult};
use crate::Guard;
use argus_core::Value;
use argus_signature::{Args, Signature};

/// Checks that argument values are members of declared collections.
#[derive(Debug, Clone)]
pub struct MembershipGuard {
    signature: Signature,
    allowed: Vec<(String, Value)>,
}

impl MembershipGuard {
    /// Start building a membership guard for the given signature.
    pub fn builder(signature: &Signature) -> MembershipGuardBuilder {
        MembershipGuardBuilder {
            signature: signature.clone(),
            allowed: Vec::new(),
        }
    }
}

/// Builder for a [`MembershipGuard`].
#[derive(Debug)]
pub struct MembershipGuardBuilder {
    signature: Signature,
    allowed: Vec<(String, Value)>,
}

impl MembershipGuardBuilder {
    /// Allow only members of `collection` for the named parameter.
    pub fn allowed(mut self, name: impl Into<String>, collection: impl Into<Value>) -> Self {
        self.allowed.push((name.into(), collection.into()));
        self
    }

    /// Build the guard, validating every collection against the
    /// signature.
    pub fn build(self) -> GuardResult<MembershipGuard> {
        for (name, collection) in &self.allowed {
            if !self.signature.has_param(name) {
                return Err(GuardError::unknown_param(name.clone()));
            }
            if !collection.supports_membership() {
                return Err(GuardError::not_a_container(name.clone()));
            }
        }
        Ok(MembershipGuard {
            signature: self.signature,
            allowed: self.allowed,
        })
    }
}

impl Guard for MembershipGuard {
    fn check(&self, args: &Args) -> ValidateResult<()> {
        let bound = self.signature.bind(args);
        for (name, collection) in &self.allowed {
            let value = match bound.get(name) {
                Some(value) => value,
                None => return Err(ValidateError::missing_argument(name.clone())),
            };
            if !collection.contains(value) {
                return Err(ValidateError::NotAMember {
                    name: name.clone(),
                    allowed: collection.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig() -> Signature {
        Signature::builder().param("mode").build().unwrap()
    }

    fn modes() -> Value {
        Value::List(vec![
            Value::Str("r".into()),
            Value::Str("w".into()),
            Value::Str("a".into()),
        ])
    }

    #[test]
    fn test_member_accepted() {
        let guard = MembershipGuard::builder(&sig()).allowed("mode", modes()).build().unwrap();
        assert!(guard.check(&Args::new().pos("w")).is_ok());
    }

    #[test]
    fn test_non_member_rejected() {
        let guard = MembershipGuard::builder(&sig()).allowed("mode", modes()).build().unwrap();
        let err = guard.check(&Args::new().pos("x")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value for \"mode\" is not one of the allowed values: [\"r\", \"w\", \"a\"]"
        );
    }

    #[test]
    fn test_map_membership_tests_keys() {
        let table = Value::Map(vec![(Value::Str("on".into()), Value::Int(1))]);
        let guard = MembershipGuard::builder(&sig()).allowed("mode", table).build().unwrap();
        assert!(guard.check(&Args::new().pos("on")).is_ok());
        assert!(guard.check(&Args::new().pos(1i64)).is_err());
    }

    #[test]
    fn test_construction_errors() {
        let err = MembershipGuard::builder(&sig())
            .allowed("missing", modes())
            .build()
            .unwrap_err();
        assert_eq!(err, GuardError::unknown_param("missing"));

        let err = MembershipGuard::builder(&sig())
            .allowed("mode", 42i64)
            .build()
            .unwrap_err();
        assert_eq!(err, GuardError::not_a_container("mode"));
    }
}
