//! Supplier: no input, one output, may fault.

use crate::handler::Handler;
use crate::op::Op;
use keel_fault::Fault;

/// A fallible producer of values.
#[must_use]
pub struct Supplier<T>(pub(crate) Op<(), T>);

impl<T: 'static> Supplier<T> {
    /// Wrap a fallible closure.
    pub fn from_fn(mut f: impl FnMut() -> Result<T, Fault> + 'static) -> Self {
        Supplier(Op::new(move |()| f()))
    }

    /// A supplier that always produces a copy of the given value.
    pub fn of_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(move || Ok(value.clone()))
    }

    /// A supplier that always fails with a copy of the given fault.
    pub fn of_fault(fault: Fault) -> Self {
        Self::from_fn(move || Err(fault.clone()))
    }

    pub fn supply(&mut self) -> Result<T, Fault> {
        self.0.invoke(())
    }

    /// Run `self`, then `other` only if `self` succeeded; the composite
    /// supplies `other`'s value. Either fault propagates untouched.
    pub fn and<T2: 'static>(self, other: Supplier<T2>) -> Supplier<T2> {
        let mut other = other;
        Supplier(self.0.then(Op::new(move |_: T| other.0.invoke(()))))
    }

    /// Feed `self`'s value through a handler, only when `self` succeeds.
    pub fn and_handled<R: 'static>(self, handler: Handler<T, R>) -> Supplier<R> {
        Supplier(self.0.then(handler.0))
    }

    /// Supply from `self`; on failure supply from `other`. A successful
    /// fallback discards `self`'s fault; when both fail, `other`'s fault
    /// surfaces with `self`'s suppressed under it.
    pub fn or_supplied(self, other: Supplier<T>) -> Supplier<T> {
        Supplier(self.0.fallback(other.0))
    }

    /// Supply from `self`; on any fault fall back to a copy of the
    /// given value, discarding the fault.
    pub fn or_value(self, value: T) -> Supplier<T>
    where
        T: Clone,
    {
        self.or_supplied(Supplier::of_value(value))
    }
}
