//! Serializable diagnostic view of a fault tree.
//!
//! A [`FaultReport`] flattens a [`Fault`] — kind, message, cause chain,
//! suppressed list — into plain serializable data, so failures can be
//! rendered, logged, or shipped across a process boundary without
//! carrying the fault value itself. Suppressed entries appear in
//! attachment order.

use crate::fault::Fault;
use crate::kind::FaultKind;
use serde::{Deserialize, Serialize};

/// Recursive, order-preserving snapshot of a [`Fault`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultReport {
    pub kind: FaultKind,
    pub message: Option<String>,
    pub cause: Option<Box<FaultReport>>,
    pub suppressed: Vec<FaultReport>,
}

impl Fault {
    /// Snapshot this fault and everything reachable from it.
    pub fn report(&self) -> FaultReport {
        FaultReport {
            kind: self.kind(),
            message: self.message().map(str::to_owned),
            cause: self.cause().map(|cause| Box::new(cause.report())),
            suppressed: self.suppressed().iter().map(Fault::report).collect(),
        }
    }
}

impl From<&Fault> for FaultReport {
    fn from(fault: &Fault) -> Self {
        fault.report()
    }
}
