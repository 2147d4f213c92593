use async_trait::async_trait;

/// Live read access to the values of one form.
///
/// Implementations must read the page at call time, never a snapshot, so that
/// edits made between attempts are seen by the next pipeline run.
pub trait FieldSource {
    /// Current value of the named control, `None` when it does not exist
    fn value(&self, name: &str) -> Option<String>;

    /// Trimmed value, empty string when the control is missing
    fn trimmed(&self, name: &str) -> String {
        self.value(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }
}

/// One message attached to one field (or to a non-field location such as
/// the CAPTCHA widget or the form itself)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Detected locally without a network call
    Precondition,
    /// The server answered `valid: false`
    Rejected,
    /// Network error, bad status, malformed body or timeout
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub kind: FailureKind,
    pub errors: Vec<FieldError>,
}

impl StepFailure {
    pub fn precondition(errors: Vec<FieldError>) -> Self {
        Self {
            kind: FailureKind::Precondition,
            errors,
        }
    }

    pub fn rejected(field: &str, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Rejected,
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn transport(field: &str, message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            errors: vec![FieldError::new(field, message)],
        }
    }
}

pub type StepOutcome = Result<(), StepFailure>;

/// One stage of the submission pipeline.
///
/// Steps run strictly in declared order and the pipeline stops at the first
/// failing one. A step never retries on its own; any transport problem is
/// reported as a `Transport` failure.
#[async_trait(?Send)]
pub trait ValidationStep {
    fn name(&self) -> &'static str;

    async fn check(&self, fields: &dyn FieldSource) -> StepOutcome;
}
