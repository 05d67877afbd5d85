//! Callback: no input, no output, best-effort `or` contract.

use crate::op::Op;
use keel_fault::Fault;

/// A fallible unit of work shaped like [`Action`](crate::Action), kept
/// as its own type because its `or` contract differs: a successful
/// fallback does not erase the primary fault, it only guarantees the
/// fallback ran before the fault is raised.
#[must_use]
pub struct Callback(pub(crate) Op<(), ()>);

impl Callback {
    /// Wrap a fallible closure.
    pub fn from_fn(mut f: impl FnMut() -> Result<(), Fault> + 'static) -> Self {
        Callback(Op::new(move |()| f()))
    }

    /// A callback that does nothing.
    pub fn noop() -> Self {
        Self::from_fn(|| Ok(()))
    }

    /// A callback that always fails with a copy of the given fault.
    pub fn of_fault(fault: Fault) -> Self {
        Self::from_fn(move || Err(fault.clone()))
    }

    pub fn call(&mut self) -> Result<(), Fault> {
        self.0.invoke(())
    }

    /// Run `self`, then `other` only if `self` succeeded. Either fault
    /// propagates untouched.
    pub fn and(self, other: Callback) -> Callback {
        Callback(self.0.then(other.0))
    }

    /// Run `self`; on failure run `other`, then raise `self`'s fault
    /// even when `other` succeeded. When both fail, `other`'s fault
    /// surfaces with `self`'s suppressed under it.
    pub fn or(self, other: Callback) -> Callback {
        Callback(self.0.rescue_then_raise(other.0))
    }

    /// Run `self`, then `other` unconditionally — even after a fault in
    /// `self`. The later fault wins; the earlier one is suppressed under
    /// it only when both occur.
    pub fn secured_and(self, other: Callback) -> Callback {
        Callback(self.0.ensure(other.0))
    }
}
