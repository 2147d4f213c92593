use crate::shared::api::FetchSubmit;
use crate::shared::config::FormConfig;
use crate::shared::form_view::FormView;
use crate::shared::submission::SubmissionController;

pub const FORM_ID: &str = "cancel-request-form";
pub const DEFAULT_ACTION: &str = "/cancel_request";
/// Where to go once the cancellation is confirmed
pub const AFTER_CANCEL_URL: &str = "/";
/// Long enough to read the server's confirmation
pub const REDIRECT_DELAY_MS: u32 = 2500;

pub struct CancelRequestViewModel {
    pub state: FormView,
    pub controller: SubmissionController<FormView, FetchSubmit>,
}

impl CancelRequestViewModel {
    pub fn new(config: &FormConfig) -> Self {
        let state = FormView::new(FORM_ID);
        // Nothing to check locally; the guard alone prevents double cancels.
        let controller = SubmissionController::new(
            "cancel-request",
            state,
            FetchSubmit {
                form: state.form,
                action: config.action_or(DEFAULT_ACTION),
                location: FORM_ID.to_string(),
                timeout_ms: config.timeout_ms,
            },
            Vec::new(),
        );
        Self { state, controller }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::submit::rejection_errors;
    use crate::shared::submission::{Phase, SubmitDisposition, SubmitOutcome};
    use crate::shared::testing::{FakeForm, FakeSubmitter};
    use contracts::shared::submission::SubmissionResponse;
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn test_confirmed_cancel_reports_reason() {
        let submitter = Rc::new(FakeSubmitter::fetch(vec![SubmitOutcome::Accepted(Some(
            "Your pickup has been cancelled.".to_string(),
        ))]));
        let controller = SubmissionController::new(
            "cancel-request",
            FakeForm::with(&[("request_id", "17")]),
            submitter.clone(),
            Vec::new(),
        );

        assert_eq!(block_on(controller.attempt()), SubmitDisposition::Validate);
        let session = controller.session();
        assert_eq!(session.phase, Phase::Submitted);
        assert_eq!(session.notice.as_deref(), Some("Your pickup has been cancelled."));
        assert_eq!(block_on(controller.attempt()), SubmitDisposition::Suppress);
        assert_eq!(submitter.calls(), 1);
    }

    #[test]
    fn test_refused_cancel_shows_reason_on_form() {
        let response: SubmissionResponse =
            serde_json::from_str(r#"{"valid": false, "reason": "Pickup already completed."}"#)
                .unwrap();
        let submitter = Rc::new(FakeSubmitter::fetch(vec![SubmitOutcome::Rejected(
            rejection_errors(&response, FORM_ID),
        )]));
        let controller = SubmissionController::new(
            "cancel-request",
            FakeForm::with(&[("request_id", "17")]),
            submitter,
            Vec::new(),
        );

        block_on(controller.attempt());
        let session = controller.session();
        assert_eq!(session.phase, Phase::Failed);
        assert_eq!(session.pending_errors[0].field, FORM_ID);
        assert_eq!(session.pending_errors[0].message, "Pickup already completed.");
    }
}
