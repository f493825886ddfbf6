//! Declared call signatures.
//!
//! Parameter names and optional type hints are registered explicitly
//! through a builder. Guards consume the resulting signature when they
//! are constructed and bind call arguments against it at call time.

use crate::args::{Args, BoundArgs};
use crate::error::{SignatureError, SignatureResult};
use argus_core::TypeHint;

/// Receiver parameter names that are excluded from validation.
pub const RECEIVER_NAMES: &[&str] = &["self", "cls"];

/// A declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    hint: Option<TypeHint>,
}

impl Param {
    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type hint, if any.
    pub fn hint(&self) -> Option<&TypeHint> {
        self.hint.as_ref()
    }
}

/// An immutable description of a callable's parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    params: Vec<Param>,
    variadic_positional: bool,
    variadic_keyword: bool,
}

impl Signature {
    /// Start building a signature.
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Declared parameters, in order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Looks up a parameter by name.
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|param| param.name == name)
    }

    /// Returns true if a parameter with the given name is declared.
    pub fn has_param(&self, name: &str) -> bool {
        self.param(name).is_some()
    }

    /// Returns true if the signature accepts variable-length positional
    /// or keyword arguments.
    pub fn is_variadic(&self) -> bool {
        self.variadic_positional || self.variadic_keyword
    }

    /// Returns true if the first parameter is a bound-method receiver.
    pub fn has_receiver(&self) -> bool {
        self.params
            .first()
            .map(|param| RECEIVER_NAMES.contains(&param.name.as_str()))
            .unwrap_or(false)
    }

    /// Binds positional and keyword arguments to parameter names.
    ///
    /// Positionals are zipped against parameter names by index, then
    /// keyword entries are merged in. Arity and collision rules follow
    /// ordinary calling conventions and are the caller's responsibility;
    /// they are not re-validated here.
    pub fn bind(&self, args: &Args) -> BoundArgs {
        let mut bound = BoundArgs::new();
        for (param, value) in self.params.iter().zip(args.positional()) {
            bound.insert(param.name.clone(), value.clone());
        }
        for (name, value) in args.keyword() {
            bound.insert(name.clone(), value.clone());
        }
        bound
    }
}

/// Builder for a [`Signature`].
#[derive(Debug, Default)]
pub struct SignatureBuilder {
    params: Vec<Param>,
    variadic_positional: bool,
    variadic_keyword: bool,
}

impl SignatureBuilder {
    /// Declare an unhinted parameter.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param {
            name: name.into(),
            hint: None,
        });
        self
    }

    /// Declare a parameter with a type hint.
    pub fn param_hinted(mut self, name: impl Into<String>, hint: TypeHint) -> Self {
        self.params.push(Param {
            name: name.into(),
            hint: Some(hint),
        });
        self
    }

    /// Mark the signature as accepting variable-length positional
    /// arguments.
    pub fn variadic_positional(mut self) -> Self {
        self.variadic_positional = true;
        self
    }

    /// Mark the signature as accepting variable-length keyword arguments.
    pub fn variadic_keyword(mut self) -> Self {
        self.variadic_keyword = true;
        self
    }

    /// Build the immutable signature.
    pub fn build(self) -> SignatureResult<Signature> {
        for (i, param) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|other| other.name == param.name) {
                return Err(SignatureError::DuplicateParam(param.name.clone()));
            }
        }
        Ok(Signature {
            params: self.params,
            variadic_positional: self.variadic_positional,
            variadic_keyword: self.variadic_keyword,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::{TypeName, Value};

    fn sig() -> Signature {
        Signature::builder()
            .param_hinted("left", TypeHint::Plain(TypeName::Str))
            .param_hinted("right", TypeHint::Plain(TypeName::Int))
            .build()
            .unwrap()
    }

    #[test]
    fn test_duplicate_param_rejected() {
        let err = Signature::builder()
            .param("x")
            .param("x")
            .build()
            .unwrap_err();
        assert_eq!(err, SignatureError::DuplicateParam("x".to_string()));
    }

    #[test]
    fn test_param_lookup() {
        let sig = sig();
        assert!(sig.has_param("left"));
        assert!(!sig.has_param("middle"));
        assert!(sig.param("right").unwrap().hint().is_some());
    }

    #[test]
    fn test_receiver_detection() {
        let method = Signature::builder().param("self").param("x").build().unwrap();
        assert!(method.has_receiver());

        let classmethod = Signature::builder().param("cls").build().unwrap();
        assert!(classmethod.has_receiver());

        assert!(!sig().has_receiver());
    }

    #[test]
    fn test_variadic_flags() {
        let sig = Signature::builder()
            .param("x")
            .variadic_positional()
            .build()
            .unwrap();
        assert!(sig.is_variadic());
        assert!(!self::sig().is_variadic());
    }

    #[test]
    fn test_bind_zips_positionals_then_merges_keywords() {
        // GIVEN a two-parameter signature
        let sig = sig();

        // WHEN binding one positional and one keyword argument
        let args = Args::new().pos("a").kw("right", 4i64);
        let bound = sig.bind(&args);

        // THEN both resolve by name, in parameter order
        assert_eq!(bound.get("left"), Some(&Value::Str("a".into())));
        assert_eq!(bound.get("right"), Some(&Value::Int(4)));
        let names: Vec<&str> = bound.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["left", "right"]);
    }

    #[test]
    fn test_bind_keyword_only_calls() {
        let sig = sig();
        let args = Args::new().kw("right", 4i64).kw("left", "a");
        let bound = sig.bind(&args);
        assert_eq!(bound.len(), 2);
        assert_eq!(bound.get("left"), Some(&Value::Str("a".into())));
    }

    #[test]
    fn test_bind_ignores_extra_positionals() {
        let sig = sig();
        let args = Args::new().pos("a").pos(1i64).pos(99i64);
        let bound = sig.bind(&args);
        assert_eq!(bound.len(), 2);
    }
}
