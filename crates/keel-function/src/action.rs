//! Action: no input, no output, may fault.

use crate::op::Op;
use keel_fault::Fault;

/// A fallible unit of work with no input and no output.
///
/// Composites returned by the combinators are themselves `Action`s, so
/// pipelines nest to arbitrary depth.
#[must_use]
pub struct Action(pub(crate) Op<(), ()>);

impl Action {
    /// Wrap a fallible closure.
    pub fn from_fn(mut f: impl FnMut() -> Result<(), Fault> + 'static) -> Self {
        Action(Op::new(move |()| f()))
    }

    /// An action that does nothing.
    pub fn noop() -> Self {
        Self::from_fn(|| Ok(()))
    }

    /// An action that always fails with a copy of the given fault.
    pub fn of_fault(fault: Fault) -> Self {
        Self::from_fn(move || Err(fault.clone()))
    }

    pub fn perform(&mut self) -> Result<(), Fault> {
        self.0.invoke(())
    }

    /// Run `self`, then `other` only if `self` succeeded. Either fault
    /// propagates untouched.
    pub fn and(self, other: Action) -> Action {
        Action(self.0.then(other.0))
    }

    /// Run `self`; on failure fall back to `other`. A successful
    /// fallback discards `self`'s fault; when both fail, `other`'s fault
    /// surfaces with `self`'s suppressed under it.
    pub fn or(self, other: Action) -> Action {
        Action(self.0.fallback(other.0))
    }

    /// Run `self`, then `other` unconditionally — even after a fault in
    /// `self`. The later fault wins; the earlier one is suppressed under
    /// it only when both occur.
    pub fn secured_and(self, other: Action) -> Action {
        Action(self.0.ensure(other.0))
    }
}
