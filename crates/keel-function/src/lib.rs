//! # Keel Combinator Algebra
//!
//! A family of fallible operation shapes, closed under composition:
//!
//! ```text
//! Action        ← no input, no output
//! Callback      ← no input, no output (best-effort `or` contract)
//! Supplier<T>   ← no input, one output
//! Consumer<T>   ← one input, no output
//! Handler<T, R> ← one input, one output
//! Predicate<T>  ← one input, boolean output
//! Condition     ← no input, boolean output
//! ```
//!
//! Every shape is a thin newtype over one generic internal operation, so
//! each composition protocol is implemented exactly once (the internal
//! `op` module):
//!
//! - **sequential-success** `and`: the second operand runs only when the
//!   first succeeds; a fault propagates untouched;
//! - **discarding fallback** `or`: the second operand runs only when the
//!   first fails; its success erases the first fault; double failure
//!   surfaces the fallback's fault with the first suppressed under it;
//! - **best-effort fallback** (`Callback::or`): as above, except a
//!   successful fallback does not erase the first fault — it is still
//!   raised once the fallback has run;
//! - **unconditional-both** `secured_and`: the second operand always
//!   runs (release/cleanup semantics); whichever fault occurred last
//!   wins, the earlier one demoted to suppressed only when both occur;
//! - **boolean algebra** on predicates and conditions, with strict
//!   left-to-right short-circuit evaluation.
//!
//! Faults are never wrapped or translated — only propagated, attached as
//! suppressed siblings, or explicitly discarded by the fallback
//! protocols. The outermost caller observes exactly one fault per
//! invocation, whose suppressed list is the complete ordered history of
//! subsumed failures.

pub mod action;
pub mod callback;
pub mod condition;
pub mod consumer;
pub mod handler;
mod op;
pub mod predicate;
pub mod supplier;

pub use action::Action;
pub use callback::Callback;
pub use condition::Condition;
pub use consumer::Consumer;
pub use handler::Handler;
pub use predicate::Predicate;
pub use supplier::Supplier;
