//! Condition: no input, boolean output, may fault.

use crate::op::Op;
use keel_fault::Fault;

/// A fallible boolean test taking no input.
///
/// Same boolean algebra and short-circuit rules as
/// [`Predicate`](crate::Predicate).
#[must_use]
pub struct Condition(pub(crate) Op<(), bool>);

impl Condition {
    /// Wrap a fallible closure.
    pub fn from_fn(mut f: impl FnMut() -> Result<bool, Fault> + 'static) -> Self {
        Condition(Op::new(move |()| f()))
    }

    /// A condition that always produces the given value.
    pub fn direct(value: bool) -> Self {
        Self::from_fn(move || Ok(value))
    }

    /// A condition that always fails with a copy of the given fault.
    pub fn of_fault(fault: Fault) -> Self {
        Self::from_fn(move || Err(fault.clone()))
    }

    pub fn compute(&mut self) -> Result<bool, Fault> {
        self.0.invoke(())
    }

    pub fn not(self) -> Condition {
        Condition(self.0.not())
    }

    pub fn and(self, other: Condition) -> Condition {
        Condition(self.0.and(other.0))
    }

    pub fn nand(self, other: Condition) -> Condition {
        Condition(self.0.nand(other.0))
    }

    pub fn or(self, other: Condition) -> Condition {
        Condition(self.0.or(other.0))
    }

    pub fn nor(self, other: Condition) -> Condition {
        Condition(self.0.nor(other.0))
    }

    pub fn xor(self, other: Condition) -> Condition {
        Condition(self.0.xor(other.0))
    }

    pub fn xnor(self, other: Condition) -> Condition {
        Condition(self.0.xnor(other.0))
    }

    /// Material implication, `!self || other`.
    pub fn imply(self, other: Condition) -> Condition {
        Condition(self.0.imply(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keel_fault::FaultKind;
    use std::cell::Cell;
    use std::rc::Rc;

    fn fault(message: &str) -> Fault {
        Fault::with_message(FaultKind::UncheckedRecoverable, message)
    }

    fn counting(runs: &Rc<Cell<u32>>, value: bool) -> Condition {
        let runs = Rc::clone(runs);
        Condition::from_fn(move || {
            runs.set(runs.get() + 1);
            Ok(value)
        })
    }

    #[test]
    fn truth_table_samples() {
        let mut c = Condition::direct(true).and(Condition::direct(true));
        assert!(c.compute().unwrap());
        let mut c = Condition::direct(false).nand(Condition::direct(false));
        assert!(c.compute().unwrap());
        let mut c = Condition::direct(true).xor(Condition::direct(true));
        assert!(!c.compute().unwrap());
        let mut c = Condition::direct(true).imply(Condition::direct(false));
        assert!(!c.compute().unwrap());
        let mut c = Condition::direct(false).xnor(Condition::direct(false));
        assert!(c.compute().unwrap());
        let mut c = Condition::direct(false).nor(Condition::direct(false));
        assert!(c.compute().unwrap());
    }

    #[test]
    fn nor_short_circuits_on_a_true_left() {
        let right = Rc::new(Cell::new(0));
        let mut composite = Condition::direct(true).nor(counting(&right, false));
        assert!(!composite.compute().unwrap());
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn nand_runs_right_only_when_left_is_true() {
        let right = Rc::new(Cell::new(0));
        let mut composite = Condition::direct(true).nand(counting(&right, true));
        assert!(!composite.compute().unwrap());
        assert_eq!(right.get(), 1);

        let right = Rc::new(Cell::new(0));
        let mut composite = Condition::direct(false).nand(counting(&right, true));
        assert!(composite.compute().unwrap());
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn xnor_stops_after_a_left_fault() {
        let right = Rc::new(Cell::new(0));
        let mut composite = Condition::of_fault(fault("a")).xnor(counting(&right, true));
        assert_eq!(composite.compute().unwrap_err().message(), Some("a"));
        assert_eq!(right.get(), 0);
    }

    #[test]
    fn composites_nest_arbitrarily() {
        let mut composite = Condition::direct(true)
            .and(Condition::direct(true).or(Condition::direct(false)))
            .imply(Condition::direct(false).not());
        assert!(composite.compute().unwrap());
    }
}
