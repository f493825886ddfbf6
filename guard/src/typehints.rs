//! Type-hint guard.

use crate::error::{GuardError, GuardResult, ValidateError, ValidateResult};
use crate::Guard;
use argus_signature::{Args, Signature};
use argus_typecheck::{build_validator, Validator};

/// Options controlling a [`TypeHintGuard`].
#[derive(Debug, Clone, Copy)]
pub struct TypeHintOptions {
    /// Require every parameter (receiver excluded) to carry a hint.
    pub all_required: bool,
    /// Check collection members against nested hints. Can be slow on
    /// large collections.
    pub deep: bool,
    /// Drop the detailed cause from the reported error.
    pub clean_trace: bool,
}

impl Default for TypeHintOptions {
    fn default() -> Self {
        Self {
            all_required: true,
            deep: false,
            clean_trace: true,
        }
    }
}

/// Checks call arguments against the type hints declared in a signature.
///
/// The validator tree for every hinted parameter is built once, when the
/// guard is constructed; unsupported hints and missing hints surface
/// there rather than at call time. A receiver parameter (`self`/`cls`)
/// is excluded from validation.
#[derive(Debug, Clone)]
pub struct TypeHintGuard {
    signature: Signature,
    validators: Vec<(String, Validator)>,
    options: TypeHintOptions,
}

impl TypeHintGuard {
    /// Build a guard over every hinted parameter of the signature.
    pub fn new(signature: &Signature, options: TypeHintOptions) -> GuardResult<Self> {
        if signature.is_variadic() {
            return Err(GuardError::VariadicArgs);
        }

        let skip = usize::from(signature.has_receiver());
        let params = &signature.params()[skip..];

        if options.all_required && params.iter().any(|param| param.hint().is_none()) {
            return Err(GuardError::MissingHints);
        }

        let mut validators = Vec::new();
        for param in params {
            if let Some(hint) = param.hint() {
                validators.push((param.name().to_string(), build_validator(hint)?));
            }
        }

        Ok(Self {
            signature: signature.clone(),
            validators,
            options,
        })
    }

    fn validator(&self, name: &str) -> Option<&Validator> {
        self.validators
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, validator)| validator)
    }
}

impl Guard for TypeHintGuard {
    /// Checks every supplied argument that has a declared hint.
    /// Arguments without hints (including the receiver) are ignored.
    fn check(&self, args: &Args) -> ValidateResult<()> {
        let bound = self.signature.bind(args);
        for (name, value) in bound.iter() {
            let validator = match self.validator(name) {
                Some(validator) => validator,
                None => continue,
            };
            if let Err(cause) = validator.validate(value, self.options.deep) {
                log::error!("type validation failed for argument \"{}\": {}", name, cause);
                let retained = if self.options.clean_trace {
                    None
                } else {
                    Some(cause.clone())
                };
                return Err(ValidateError::InvalidType {
                    name: name.to_string(),
                    detail: cause.to_string(),
                    cause: retained,
                });
            }
        }
        Ok(())
    }
}
