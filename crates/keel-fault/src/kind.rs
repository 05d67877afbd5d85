//! The two-axis fault classification.

/// The four base fault kinds formed by the checked/unchecked and
/// fatal/recoverable axes.
///
/// The kind is fixed when a fault is constructed and never changes as
/// the fault travels through cause chains or suppressed lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Must be handled; indicates unrecoverable corruption. The process
    /// should generally terminate.
    CheckedFatal,

    /// Must be handled; safe to continue afterwards.
    CheckedRecoverable,

    /// May propagate silently; reserved for "this code path must never
    /// execute" guards.
    UncheckedFatal,

    /// May propagate silently; safe to continue. Used pervasively for
    /// validation faults.
    UncheckedRecoverable,
}

impl FaultKind {
    /// Whether the caller is expected to handle faults of this kind
    /// rather than let them propagate silently.
    pub fn is_checked(self) -> bool {
        matches!(self, Self::CheckedFatal | Self::CheckedRecoverable)
    }

    /// Whether faults of this kind indicate the process should abort.
    pub fn is_fatal(self) -> bool {
        matches!(self, Self::CheckedFatal | Self::UncheckedFatal)
    }

    /// Whether execution may continue after a fault of this kind.
    pub fn is_recoverable(self) -> bool {
        !self.is_fatal()
    }
}

impl std::fmt::Display for FaultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckedFatal => write!(f, "checked_fatal"),
            Self::CheckedRecoverable => write!(f, "checked_recoverable"),
            Self::UncheckedFatal => write!(f, "unchecked_fatal"),
            Self::UncheckedRecoverable => write!(f, "unchecked_recoverable"),
        }
    }
}

impl std::str::FromStr for FaultKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checked_fatal" => Ok(Self::CheckedFatal),
            "checked_recoverable" => Ok(Self::CheckedRecoverable),
            "unchecked_fatal" => Ok(Self::UncheckedFatal),
            "unchecked_recoverable" => Ok(Self::UncheckedRecoverable),
            _ => Err(format!("unknown fault kind: {s}")),
        }
    }
}
