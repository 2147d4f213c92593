use async_trait::async_trait;

use super::session::FormSession;
use super::step::{FieldError, FieldSource};

/// The page a controller drives.
///
/// Everything visible (loader, disabled submit control, inline errors,
/// success panels) is derived from the session passed to `render`; the
/// surface keeps no state of its own that the controller would have to ask for.
pub trait FormSurface: FieldSource {
    fn render(&self, session: &FormSession);
}

/// Result of the real submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The browser is submitting the form itself and will navigate away
    Dispatched,
    /// The server accepted an in-page submission
    Accepted(Option<String>),
    /// The server refused the submission; never empty
    Rejected(Vec<FieldError>),
}

/// Performs the one server-bound submission once every step has passed
#[async_trait(?Send)]
pub trait Submitter {
    /// `true` when the submission re-fires the form's own submit event,
    /// which the controller must then let through untouched
    fn is_native(&self) -> bool;

    async fn submit(&self) -> SubmitOutcome;
}
