//! Guarded call combinator.

use crate::error::ValidateResult;
use crate::Guard;
use argus_signature::{Args, BoundArgs, Signature};

/// Wraps a callable together with its signature and guards.
///
/// Every guard runs against the supplied arguments before the callable
/// is invoked; the first violation aborts the call. This is the
/// library's rendition of decorator application: attach once, call any
/// number of times.
pub struct Guarded<F> {
    signature: Signature,
    guards: Vec<Box<dyn Guard>>,
    func: F,
}

impl<F, R> Guarded<F>
where
    F: Fn(&BoundArgs) -> R,
{
    /// Wrap a callable.
    pub fn new(signature: Signature, func: F) -> Self {
        Self {
            signature,
            guards: Vec::new(),
            func,
        }
    }

    /// Attach a guard.
    pub fn with(mut self, guard: impl Guard + 'static) -> Self {
        self.guards.push(Box::new(guard));
        self
    }

    /// Check every guard, then invoke the wrapped callable with the
    /// bound arguments.
    pub fn call(&self, args: &Args) -> ValidateResult<R> {
        for guard in &self.guards {
            guard.check(args)?;
        }
        let bound = self.signature.bind(args);
        Ok((self.func)(&bound))
    }
}
