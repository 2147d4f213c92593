use std::rc::Rc;

use contracts::domain::a001_pickup_request::{fields, GateOption, NOTICE_VALUE};

use crate::shared::api::{AddressVerifier, NativeSubmit, ZipVerifier};
use crate::shared::captcha::RecaptchaWidget;
use crate::shared::config::FormConfig;
use crate::shared::form_view::FormView;
use crate::shared::submission::{SubmissionController, ValidationStep};
use crate::shared::validation::{
    AddressExists, AddressFields, CaptchaPresence, CaptchaWidget, GateAccess, RequiredFields,
    ZipInServiceArea,
};

pub const FORM_ID: &str = "init-form";
pub const CAPTCHA_ID: &str = "recaptcha-form";
pub const DEFAULT_ACTION: &str = "/request_init";

/// Fields that have an inline error slot
pub const SLOTTED: &[&str] = &[
    fields::EMAIL,
    fields::ADDRESS,
    fields::CITY,
    fields::ZIP,
    fields::GATED_OPTION,
    fields::GATE_CODE,
    CAPTCHA_ID,
];

/// Cheap local checks first, then the two server lookups
pub fn pipeline(
    zip: Rc<dyn ZipVerifier>,
    address: Rc<dyn AddressVerifier>,
    captcha: Rc<dyn CaptchaWidget>,
) -> Vec<Box<dyn ValidationStep>> {
    vec![
        Box::new(RequiredFields::new(vec![
            (fields::EMAIL, "Email"),
            (fields::ADDRESS, "Address"),
            (fields::CITY, "City"),
            (fields::ZIP, "Zip code"),
        ])),
        Box::new(GateAccess),
        Box::new(CaptchaPresence::new(captcha, CAPTCHA_ID)),
        Box::new(ZipInServiceArea::new(fields::ZIP, zip)),
        Box::new(AddressExists::new(
            AddressFields {
                address: fields::ADDRESS,
                city: fields::CITY,
                zip: fields::ZIP,
                place_id: None,
            },
            address,
        )),
    ]
}

/// Hidden `finalNotice` value for the selected gate option
pub fn notice_value(option: &str) -> &'static str {
    if GateOption::from_value(option) == Some(GateOption::Notice) {
        NOTICE_VALUE
    } else {
        ""
    }
}

pub struct RequestPickupViewModel {
    pub state: FormView,
    pub captcha: RecaptchaWidget,
    pub controller: SubmissionController<FormView, NativeSubmit>,
}

impl RequestPickupViewModel {
    pub fn new(config: &FormConfig) -> Self {
        let state = FormView::new(FORM_ID);
        let captcha = RecaptchaWidget::new();
        let verifier = Rc::new(config.verifier());
        let controller = SubmissionController::new(
            "request-pickup",
            state,
            NativeSubmit {
                form: state.form,
                location: FORM_ID.to_string(),
            },
            pipeline(verifier.clone(), verifier, Rc::new(captcha)),
        );
        Self {
            state,
            captcha,
            controller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::submission::{messages, Phase, SubmitDisposition};
    use crate::shared::testing::{FakeAddress, FakeCaptcha, FakeForm, FakeSubmitter, FakeZip};
    use futures::executor::block_on;

    struct Setup {
        zip: Rc<FakeZip>,
        address: Rc<FakeAddress>,
        submitter: Rc<FakeSubmitter>,
        controller: SubmissionController<FakeForm, Rc<FakeSubmitter>>,
    }

    fn setup(form: FakeForm, captcha: FakeCaptcha) -> Setup {
        let zip = Rc::new(FakeZip::serving(&["94566"]));
        let address = Rc::new(FakeAddress::accepting(&["100 Main St"]));
        let submitter = Rc::new(FakeSubmitter::native());
        let controller = SubmissionController::new(
            "request-pickup",
            form,
            submitter.clone(),
            pipeline(zip.clone(), address.clone(), Rc::new(captcha)),
        );
        Setup {
            zip,
            address,
            submitter,
            controller,
        }
    }

    fn filled() -> FakeForm {
        FakeForm::with(&[
            ("email", "pat@example.com"),
            ("address", "100 Main St"),
            ("city", "Pleasanton"),
            ("zip", "94566"),
        ])
    }

    #[test]
    fn test_step_order() {
        let s = setup(filled(), FakeCaptcha::solved());
        assert_eq!(
            s.controller.step_names(),
            vec![
                "required-fields",
                "gate-access",
                "captcha-presence",
                "zip-range",
                "address-exists"
            ]
        );
    }

    #[test]
    fn test_complete_form_submits_once() {
        let s = setup(filled(), FakeCaptcha::solved());
        assert_eq!(block_on(s.controller.attempt()), SubmitDisposition::Validate);
        assert_eq!(s.controller.phase(), Phase::Submitting);
        assert_eq!(s.submitter.calls(), 1);

        let request = &s.address.requests()[0];
        assert_eq!(request.full_addr, "100 Main St, Pleasanton, 94566");
        assert_eq!(request.place_id, None);

        // The native re-submission goes straight through
        assert_eq!(block_on(s.controller.attempt()), SubmitDisposition::PassThrough);
        assert_eq!(s.submitter.calls(), 1);
    }

    #[test]
    fn test_gate_checked_before_network() {
        let form = filled();
        form.set("gated", "y");
        form.set("selectedGatedOption", "code");
        let s = setup(form, FakeCaptcha::solved());

        block_on(s.controller.attempt());
        let session = s.controller.session();
        assert_eq!(session.phase, Phase::Failed);
        assert_eq!(session.pending_errors[0].field, "finalGateCode");
        assert_eq!(session.pending_errors[0].message, messages::GATE_CODE_REQUIRED);
        assert!(s.zip.queries().is_empty());
    }

    #[test]
    fn test_missing_captcha_reported_at_widget() {
        let s = setup(filled(), FakeCaptcha::unsolved());
        block_on(s.controller.attempt());
        let session = s.controller.session();
        assert_eq!(session.pending_errors[0].field, CAPTCHA_ID);
        assert!(s.zip.queries().is_empty());
        assert_eq!(s.submitter.calls(), 0);
    }

    #[test]
    fn test_posted_gated_value_triggers_gate_check() {
        let form = filled();
        form.set("gated", contracts::domain::a001_pickup_request::GATED_VALUE);
        form.set("selectedGatedOption", "code");
        let s = setup(form, FakeCaptcha::solved());

        block_on(s.controller.attempt());
        let session = s.controller.session();
        assert_eq!(session.phase, Phase::Failed);
        assert_eq!(session.pending_errors[0].field, "finalGateCode");
        assert_eq!(s.submitter.calls(), 0);

        s.controller.surface().set("finalGateCode", "#1234");
        block_on(s.controller.attempt());
        assert_eq!(s.controller.phase(), Phase::Submitting);
        assert_eq!(s.submitter.calls(), 1);
    }

    #[test]
    fn test_notice_value_matches_server() {
        assert_eq!(notice_value("notice"), "true");
        assert_eq!(notice_value("code"), "");
        assert_eq!(notice_value(""), "");
    }
}
