//! Consumer: one input, no output, may fault.

use crate::op::Op;
use keel_fault::Fault;

/// A fallible sink for values.
#[must_use]
pub struct Consumer<T>(pub(crate) Op<T, ()>);

impl<T: 'static> Consumer<T> {
    /// Wrap a fallible closure.
    pub fn from_fn(f: impl FnMut(T) -> Result<(), Fault> + 'static) -> Self {
        Consumer(Op::new(f))
    }

    /// A consumer that ignores its input.
    pub fn noop() -> Self {
        Self::from_fn(|_| Ok(()))
    }

    /// A consumer that always fails with a copy of the given fault.
    pub fn of_fault(fault: Fault) -> Self {
        Self::from_fn(move |_| Err(fault.clone()))
    }

    pub fn consume(&mut self, value: T) -> Result<(), Fault> {
        self.0.invoke(value)
    }
}

impl<T: Clone + 'static> Consumer<T> {
    /// Feed the same value to `self`, then to `other` only if `self`
    /// succeeded. Either fault propagates untouched.
    pub fn and(self, other: Consumer<T>) -> Consumer<T> {
        Consumer(self.0.tee(other.0))
    }

    /// Feed the value to `self`; on failure feed the original value to
    /// `other`. A successful fallback discards `self`'s fault; when both
    /// fail, `other`'s fault surfaces with `self`'s suppressed under it.
    pub fn or(self, other: Consumer<T>) -> Consumer<T> {
        Consumer(self.0.fallback(other.0))
    }
}
