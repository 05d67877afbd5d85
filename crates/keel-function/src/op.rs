//! The generic operation underlying every public shape.
//!
//! `Op<I, O>` is a boxed fallible closure. The composition protocols are
//! implemented here once, generically over input and output; the shape
//! newtypes only pick which protocols they expose and under which name.

use keel_fault::Fault;

pub(crate) struct Op<I, O> {
    run: Box<dyn FnMut(I) -> Result<O, Fault>>,
}

impl<I: 'static, O: 'static> Op<I, O> {
    pub(crate) fn new(f: impl FnMut(I) -> Result<O, Fault> + 'static) -> Self {
        Self { run: Box::new(f) }
    }

    pub(crate) fn invoke(&mut self, input: I) -> Result<O, Fault> {
        (self.run)(input)
    }

    /// Sequential-success composition: run `self`, and only on success
    /// feed its output to `next`. A fault from either side propagates
    /// untouched; `next` never runs after a fault in `self`.
    pub(crate) fn then<O2: 'static>(mut self, mut next: Op<O, O2>) -> Op<I, O2> {
        Op::new(move |input| {
            let mid = (self.run)(input)?;
            (next.run)(mid)
        })
    }
}

impl<I: Clone + 'static, O: 'static> Op<I, O> {
    /// Discarding fallback: run `self`; on failure run `alt` with the
    /// original input. A successful fallback erases the primary fault.
    /// When both fail, the fallback's fault surfaces with the primary
    /// suppressed under it — the operand that ran last was authoritative
    /// for the outcome.
    pub(crate) fn fallback(mut self, mut alt: Op<I, O>) -> Op<I, O> {
        Op::new(move |input: I| match (self.run)(input.clone()) {
            Ok(value) => Ok(value),
            Err(primary) => match (alt.run)(input) {
                Ok(value) => Ok(value),
                Err(mut secondary) => {
                    secondary.suppress(primary);
                    Err(secondary)
                }
            },
        })
    }
}

impl<I: Clone + 'static> Op<I, ()> {
    /// Run both operands on the same input, the second only after the
    /// first succeeded.
    pub(crate) fn tee(mut self, mut next: Op<I, ()>) -> Op<I, ()> {
        Op::new(move |input: I| {
            (self.run)(input.clone())?;
            (next.run)(input)
        })
    }

    /// Best-effort fallback: run `self`; on failure run `alt`. Unlike
    /// [`Op::fallback`], a successful fallback does not erase the
    /// primary fault — it is still raised once `alt` has run. Double
    /// failure behaves as in `fallback`.
    pub(crate) fn rescue_then_raise(mut self, mut alt: Op<I, ()>) -> Op<I, ()> {
        Op::new(move |input: I| match (self.run)(input.clone()) {
            Ok(()) => Ok(()),
            Err(primary) => match (alt.run)(input) {
                Ok(()) => Err(primary),
                Err(mut secondary) => {
                    secondary.suppress(primary);
                    Err(secondary)
                }
            },
        })
    }

    /// Unconditional-both composition: run `self`, capturing any fault,
    /// then always run `follow`. A fault from `follow` wins, with the
    /// captured fault suppressed under it; otherwise the captured fault
    /// is raised alone; otherwise success.
    pub(crate) fn ensure(mut self, mut follow: Op<I, ()>) -> Op<I, ()> {
        Op::new(move |input: I| {
            let first = (self.run)(input.clone()).err();
            match (follow.run)(input) {
                Ok(()) => match first {
                    Some(fault) => Err(fault),
                    None => Ok(()),
                },
                Err(mut second) => {
                    if let Some(fault) = first {
                        second.suppress(fault);
                    }
                    Err(second)
                }
            }
        })
    }
}

impl<I: Clone + 'static> Op<I, bool> {
    pub(crate) fn not(mut self) -> Op<I, bool> {
        Op::new(move |input| Ok(!(self.run)(input)?))
    }

    /// Logical AND; `other` runs only when `self` is true.
    pub(crate) fn and(mut self, mut other: Op<I, bool>) -> Op<I, bool> {
        Op::new(move |input: I| {
            if !(self.run)(input.clone())? {
                return Ok(false);
            }
            (other.run)(input)
        })
    }

    /// Negated AND; short-circuits exactly like [`Op::and`].
    pub(crate) fn nand(mut self, mut other: Op<I, bool>) -> Op<I, bool> {
        Op::new(move |input: I| {
            if !(self.run)(input.clone())? {
                return Ok(true);
            }
            Ok(!(other.run)(input)?)
        })
    }

    /// Logical OR; `other` runs only when `self` is false.
    pub(crate) fn or(mut self, mut other: Op<I, bool>) -> Op<I, bool> {
        Op::new(move |input: I| {
            if (self.run)(input.clone())? {
                return Ok(true);
            }
            (other.run)(input)
        })
    }

    /// Negated OR; short-circuits exactly like [`Op::or`].
    pub(crate) fn nor(mut self, mut other: Op<I, bool>) -> Op<I, bool> {
        Op::new(move |input: I| {
            if (self.run)(input.clone())? {
                return Ok(false);
            }
            Ok(!(other.run)(input)?)
        })
    }

    /// Exclusive OR. No short-circuit exists, so both operands run —
    /// left to right, and a fault in the left operand stops evaluation
    /// before the right operand is invoked.
    pub(crate) fn xor(mut self, mut other: Op<I, bool>) -> Op<I, bool> {
        Op::new(move |input: I| {
            let left = (self.run)(input.clone())?;
            let right = (other.run)(input)?;
            Ok(left != right)
        })
    }

    /// Equality of the two booleans; evaluation order as in [`Op::xor`].
    pub(crate) fn xnor(mut self, mut other: Op<I, bool>) -> Op<I, bool> {
        Op::new(move |input: I| {
            let left = (self.run)(input.clone())?;
            let right = (other.run)(input)?;
            Ok(left == right)
        })
    }

    /// Material implication, `!self || other`; `other` runs only when
    /// `self` is true.
    pub(crate) fn imply(mut self, mut other: Op<I, bool>) -> Op<I, bool> {
        Op::new(move |input: I| {
            if !(self.run)(input.clone())? {
                return Ok(true);
            }
            (other.run)(input)
        })
    }
}
