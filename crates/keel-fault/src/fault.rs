//! The `Fault` value and its builder.

use crate::kind::FaultKind;
use std::backtrace::Backtrace;

/// A failure value: message, cause chain, ordered suppressed faults, and
/// the [`FaultKind`] classification fixed at construction.
///
/// Construction always succeeds; a fault is data, not a fallible
/// operation. The canonical defaults are: message absent, cause absent,
/// suppression enabled, backtrace capture enabled. Each default is
/// independently overridable through [`FaultBuilder`].
///
/// After construction the only permitted mutation is [`Fault::suppress`],
/// which appends to the suppressed list in attachment order.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", render(.message, .kind))]
pub struct Fault {
    kind: FaultKind,
    message: Option<String>,
    #[source]
    cause: Option<Box<Fault>>,
    suppressed: Vec<Fault>,
    suppression: bool,
    backtrace: Option<String>,
}

fn render(message: &Option<String>, kind: &FaultKind) -> String {
    match message {
        Some(message) => message.clone(),
        None => kind.to_string(),
    }
}

impl Fault {
    /// A fault of the given kind with all defaults.
    pub fn new(kind: FaultKind) -> Self {
        Self::builder(kind).build()
    }

    /// A fault of the given kind carrying a message, defaults otherwise.
    pub fn with_message(kind: FaultKind, message: impl Into<String>) -> Self {
        Self::builder(kind).message(message).build()
    }

    /// A fault of the given kind caused by another, defaults otherwise.
    pub fn with_cause(kind: FaultKind, cause: Fault) -> Self {
        Self::builder(kind).cause(cause).build()
    }

    /// Start building a fault of the given kind.
    pub fn builder(kind: FaultKind) -> FaultBuilder {
        FaultBuilder {
            kind,
            message: None,
            cause: None,
            suppression: true,
            capture_backtrace: true,
        }
    }

    /// Attach a secondary failure as suppressed under this fault.
    ///
    /// Appends to the end of the suppressed list; earlier entries keep
    /// their positions. Does nothing when suppression was disabled at
    /// construction.
    pub fn suppress(&mut self, other: Fault) {
        if self.suppression {
            self.suppressed.push(other);
        }
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn cause(&self) -> Option<&Fault> {
        self.cause.as_deref()
    }

    /// The suppressed faults, in attachment order.
    pub fn suppressed(&self) -> &[Fault] {
        &self.suppressed
    }

    /// Whether [`Fault::suppress`] will record anything.
    pub fn suppression_enabled(&self) -> bool {
        self.suppression
    }

    /// The backtrace captured at construction, if capture was enabled.
    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref()
    }
}

/// Builder covering every construction shape of [`Fault`].
#[derive(Debug)]
pub struct FaultBuilder {
    kind: FaultKind,
    message: Option<String>,
    cause: Option<Fault>,
    suppression: bool,
    capture_backtrace: bool,
}

impl FaultBuilder {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn cause(mut self, cause: Fault) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Enable or disable suppressed-fault recording.
    pub fn suppression(mut self, enabled: bool) -> Self {
        self.suppression = enabled;
        self
    }

    /// Enable or disable backtrace capture at `build` time.
    pub fn capture_backtrace(mut self, enabled: bool) -> Self {
        self.capture_backtrace = enabled;
        self
    }

    pub fn build(self) -> Fault {
        Fault {
            kind: self.kind,
            message: self.message,
            cause: self.cause.map(Box::new),
            suppressed: Vec::new(),
            suppression: self.suppression,
            backtrace: self
                .capture_backtrace
                .then(|| Backtrace::force_capture().to_string()),
        }
    }
}
