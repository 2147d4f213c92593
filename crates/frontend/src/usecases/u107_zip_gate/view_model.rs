use async_trait::async_trait;
use std::rc::Rc;

use contracts::domain::a001_pickup_request::fields;

use crate::shared::api::ZipVerifier;
use crate::shared::config::FormConfig;
use crate::shared::form_view::{navigate, FormView};
use crate::shared::submission::{
    FieldSource, SubmissionController, SubmitOutcome, Submitter, ValidationStep,
};
use crate::shared::validation::{RequiredFields, ZipInServiceArea};

pub const FORM_ID: &str = "request-form-input";
/// The request page, which reads `zipcode` from its query string
pub const DEFAULT_ACTION: &str = "/request_pickup";

pub const SLOTTED: &[&str] = &[fields::ZIPCODE];

pub fn pipeline(zip: Rc<dyn ZipVerifier>) -> Vec<Box<dyn ValidationStep>> {
    vec![
        Box::new(RequiredFields::new(vec![(fields::ZIPCODE, "Zip code")])),
        Box::new(ZipInServiceArea::new(fields::ZIPCODE, zip)),
    ]
}

/// `target` with the served ZIP appended as `zipcode=`
pub fn continue_url(target: &str, zip: &str) -> String {
    let separator = if target.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        target,
        separator,
        fields::ZIPCODE,
        urlencoding::encode(zip.trim())
    )
}

/// Leaves the landing page for the request form, carrying the ZIP along.
/// Nothing is posted.
pub struct ContinueToRequest<S> {
    pub fields: S,
    pub target: String,
}

#[async_trait(?Send)]
impl<S: FieldSource> Submitter for ContinueToRequest<S> {
    fn is_native(&self) -> bool {
        false
    }

    async fn submit(&self) -> SubmitOutcome {
        let url = continue_url(&self.target, &self.fields.trimmed(fields::ZIPCODE));
        log::debug!("zip served, continuing to {}", url);
        navigate(&url);
        SubmitOutcome::Dispatched
    }
}

pub struct ZipGateViewModel {
    pub state: FormView,
    pub controller: SubmissionController<FormView, ContinueToRequest<FormView>>,
}

impl ZipGateViewModel {
    pub fn new(config: &FormConfig) -> Self {
        let state = FormView::new(FORM_ID);
        let controller = SubmissionController::new(
            "zip-gate",
            state,
            ContinueToRequest {
                fields: state,
                target: config.action_or(DEFAULT_ACTION),
            },
            pipeline(Rc::new(config.verifier())),
        );
        Self { state, controller }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiError;
    use crate::shared::submission::{messages, Phase, SubmitDisposition};
    use crate::shared::testing::{FakeForm, FakeSubmitter, FakeZip, OUT_OF_AREA};
    use futures::executor::block_on;

    // The landing form never posts; a served ZIP just leaves the page
    fn leaves_page() -> Rc<FakeSubmitter> {
        Rc::new(FakeSubmitter::fetch(vec![SubmitOutcome::Dispatched]))
    }

    #[test]
    fn test_continue_url() {
        assert_eq!(continue_url("/request_pickup", " 94566 "), "/request_pickup?zipcode=94566");
        assert_eq!(
            continue_url("/request_pickup?src=landing", "94566"),
            "/request_pickup?src=landing&zipcode=94566"
        );
        assert_eq!(continue_url("/request_pickup", "9 4&"), "/request_pickup?zipcode=9%204%26");
    }

    #[test]
    fn test_served_zip_continues_once() {
        let zip = Rc::new(FakeZip::serving(&["94566"]));
        let submitter = leaves_page();
        let controller = SubmissionController::new(
            "zip-gate",
            FakeForm::with(&[("zipcode", "94566")]),
            submitter.clone(),
            pipeline(zip.clone()),
        );

        assert_eq!(block_on(controller.attempt()), SubmitDisposition::Validate);
        assert_eq!(controller.phase(), Phase::Submitting);
        assert_eq!(zip.queries(), vec!["94566"]);
        assert_eq!(submitter.calls(), 1);

        // Still on the page while the browser navigates
        assert_eq!(block_on(controller.attempt()), SubmitDisposition::Suppress);
        assert_eq!(submitter.calls(), 1);
    }

    #[test]
    fn test_unserved_zip_shows_reason() {
        let zip = Rc::new(FakeZip::serving(&["94566"]));
        let submitter = leaves_page();
        let form = FakeForm::with(&[("zipcode", "10001")]);
        let controller =
            SubmissionController::new("zip-gate", form, submitter.clone(), pipeline(zip));

        block_on(controller.attempt());
        let session = controller.session();
        assert_eq!(session.phase, Phase::Failed);
        assert_eq!(session.pending_errors.len(), 1);
        assert_eq!(session.pending_errors[0].field, "zipcode");
        assert_eq!(session.pending_errors[0].message, OUT_OF_AREA);
        assert_eq!(submitter.calls(), 0);
    }

    #[test]
    fn test_empty_zip_skips_lookup() {
        let zip = Rc::new(FakeZip::serving(&["94566"]));
        let controller = SubmissionController::new(
            "zip-gate",
            FakeForm::with(&[("zipcode", "  ")]),
            leaves_page(),
            pipeline(zip.clone()),
        );

        block_on(controller.attempt());
        assert_eq!(controller.phase(), Phase::Failed);
        assert_eq!(controller.session().pending_errors[0].message, "Zip code is required.");
        assert!(zip.queries().is_empty());
    }

    #[test]
    fn test_lookup_failure_stays_on_page() {
        let submitter = leaves_page();
        let controller = SubmissionController::new(
            "zip-gate",
            FakeForm::with(&[("zipcode", "94566")]),
            submitter.clone(),
            pipeline(Rc::new(FakeZip::failing(ApiError::Timeout(8000)))),
        );

        block_on(controller.attempt());
        let session = controller.session();
        assert_eq!(session.phase, Phase::Failed);
        assert_eq!(session.pending_errors[0].message, messages::ZIP_UNAVAILABLE);
        assert_eq!(submitter.calls(), 0);
    }
}
