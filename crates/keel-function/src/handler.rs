//! Handler: one input, one output, may fault.

use crate::op::Op;
use keel_fault::Fault;

/// A fallible transformation from `T` to `R`.
#[must_use]
pub struct Handler<T, R>(pub(crate) Op<T, R>);

impl<T: 'static, R: 'static> Handler<T, R> {
    /// Wrap a fallible closure.
    pub fn from_fn(f: impl FnMut(T) -> Result<R, Fault> + 'static) -> Self {
        Handler(Op::new(f))
    }

    /// A handler that ignores its input and produces a copy of the
    /// given value.
    pub fn of_value(value: R) -> Self
    where
        R: Clone,
    {
        Self::from_fn(move |_| Ok(value.clone()))
    }

    /// A handler that always fails with a copy of the given fault.
    pub fn of_fault(fault: Fault) -> Self {
        Self::from_fn(move |_| Err(fault.clone()))
    }

    pub fn handle(&mut self, value: T) -> Result<R, Fault> {
        self.0.invoke(value)
    }

    /// Chain: feed `self`'s output into `next`, only when `self`
    /// succeeds. Either fault propagates untouched.
    pub fn and<R2: 'static>(self, next: Handler<R, R2>) -> Handler<T, R2> {
        Handler(self.0.then(next.0))
    }
}

impl<T: Clone + 'static, R: 'static> Handler<T, R> {
    /// Handle with `self`; on failure hand the *original* input to
    /// `other`, not any partial output. A successful fallback discards
    /// `self`'s fault; when both fail, `other`'s fault surfaces with
    /// `self`'s suppressed under it.
    pub fn or(self, other: Handler<T, R>) -> Handler<T, R> {
        Handler(self.0.fallback(other.0))
    }

    /// Handle with `self`; on any fault produce a copy of the given
    /// value instead, discarding the fault.
    pub fn or_value(self, value: R) -> Handler<T, R>
    where
        R: Clone,
    {
        self.or(Handler::of_value(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_fault::FaultKind;

    fn fault(message: &str) -> Fault {
        Fault::with_message(FaultKind::UncheckedRecoverable, message)
    }

    #[test]
    fn and_chains_output_into_input() {
        let mut composite = Handler::from_fn(|n: i32| Ok(n * 2))
            .and(Handler::from_fn(|n: i32| Ok(format!("{n}!"))));
        assert_eq!(composite.handle(21).unwrap(), "42!");
    }

    #[test]
    fn and_halts_on_primary_fault() {
        let mut composite = Handler::<i32, i32>::of_fault(fault("a"))
            .and(Handler::from_fn(|n: i32| Ok(n + 1)));
        let observed = composite.handle(1).unwrap_err();
        assert_eq!(observed.message(), Some("a"));
        assert!(observed.suppressed().is_empty());
    }

    #[test]
    fn or_retries_with_the_original_input() {
        let mut composite = Handler::<i32, i32>::of_fault(fault("a"))
            .or(Handler::from_fn(|n: i32| Ok(n + 1)));
        assert_eq!(composite.handle(41).unwrap(), 42);
    }

    #[test]
    fn or_double_failure_suppresses_the_primary() {
        let mut composite = Handler::<i32, i32>::of_fault(fault("a"))
            .or(Handler::of_fault(fault("b")));
        let observed = composite.handle(1).unwrap_err();
        assert_eq!(observed.message(), Some("b"));
        assert_eq!(observed.suppressed().len(), 1);
        assert_eq!(observed.suppressed()[0].message(), Some("a"));
    }

    #[test]
    fn or_value_swallows_any_fault() {
        let mut composite = Handler::<i32, i32>::of_fault(fault("a")).or_value(0);
        assert_eq!(composite.handle(1).unwrap(), 0);
    }
}
