//! # Keel Fault Taxonomy
//!
//! Every failure in Keel is a [`Fault`]: a value carrying an optional
//! message, an optional cause chain, and an ordered list of suppressed
//! secondary faults. Two orthogonal axes classify every fault at
//! construction time:
//!
//! - **checked vs. unchecked** — must the caller be forced to handle it,
//!   or may it propagate silently;
//! - **fatal vs. recoverable** — should the process abort, or may
//!   execution continue.
//!
//! The four resulting base kinds live in [`FaultKind`]. The axes are
//! data, not types: `Result` already forces handling at every call site,
//! so the kind informs the caller's policy rather than the signature.
//!
//! Faults are immutable after construction with one exception: attaching
//! further suppressed faults via [`Fault::suppress`], a monotonic append
//! that never reorders earlier entries.

pub mod fault;
pub mod kind;
pub mod report;

pub use fault::{Fault, FaultBuilder};
pub use kind::FaultKind;
pub use report::FaultReport;
