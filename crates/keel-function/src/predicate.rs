//! Predicate: one input, boolean output, may fault.

use crate::op::Op;
use keel_fault::Fault;

/// A fallible boolean test over an input value.
///
/// The boolean combinators evaluate strictly left to right and
/// short-circuit where the operator allows: `and`/`nand`/`imply` invoke
/// the right operand only when the left is true, `or`/`nor` only when
/// the left is false, and `xor`/`xnor` always — unless the left operand
/// faulted, which stops evaluation for every operator.
#[must_use]
pub struct Predicate<T>(pub(crate) Op<T, bool>);

impl<T: 'static> Predicate<T> {
    /// Wrap a fallible closure.
    pub fn from_fn(f: impl FnMut(T) -> Result<bool, Fault> + 'static) -> Self {
        Predicate(Op::new(f))
    }

    /// A predicate that ignores its input and produces the given value.
    pub fn direct(value: bool) -> Self {
        Self::from_fn(move |_| Ok(value))
    }

    /// A predicate that always fails with a copy of the given fault.
    pub fn of_fault(fault: Fault) -> Self {
        Self::from_fn(move |_| Err(fault.clone()))
    }

    pub fn evaluate(&mut self, value: T) -> Result<bool, Fault> {
        self.0.invoke(value)
    }
}

impl<T: Clone + 'static> Predicate<T> {
    pub fn not(self) -> Predicate<T> {
        Predicate(self.0.not())
    }

    pub fn and(self, other: Predicate<T>) -> Predicate<T> {
        Predicate(self.0.and(other.0))
    }

    pub fn nand(self, other: Predicate<T>) -> Predicate<T> {
        Predicate(self.0.nand(other.0))
    }

    pub fn or(self, other: Predicate<T>) -> Predicate<T> {
        Predicate(self.0.or(other.0))
    }

    pub fn nor(self, other: Predicate<T>) -> Predicate<T> {
        Predicate(self.0.nor(other.0))
    }

    pub fn xor(self, other: Predicate<T>) -> Predicate<T> {
        Predicate(self.0.xor(other.0))
    }

    pub fn xnor(self, other: Predicate<T>) -> Predicate<T> {
        Predicate(self.0.xnor(other.0))
    }

    /// Material implication, `!self || other`.
    pub fn imply(self, other: Predicate<T>) -> Predicate<T> {
        Predicate(self.0.imply(other.0))
    }
}
