use std::rc::Rc;

use contracts::domain::a001_pickup_request::fields;

use crate::shared::api::{AddressVerifier, FetchSubmit, ZipVerifier};
use crate::shared::captcha::{RecaptchaWidget, ResetOnReject};
use crate::shared::config::FormConfig;
use crate::shared::form_view::FormView;
use crate::shared::submission::{SubmissionController, ValidationStep};
use crate::shared::validation::{
    AddressExists, AddressFields, CaptchaPresence, CaptchaWidget, RequiredFields, ZipInServiceArea,
};

pub const FORM_ID: &str = "init-form-info";
pub const CAPTCHA_ID: &str = "recaptcha-form";
pub const DEFAULT_ACTION: &str = "/mopf-submit";

pub const SLOTTED: &[&str] = &[
    fields::EMAIL,
    fields::ADDRESS,
    fields::CITY,
    fields::ZIP,
    CAPTCHA_ID,
];

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
        Box::new(CaptchaPresence::new(captcha, CAPTCHA_ID)),
        Box::new(ZipInServiceArea::new(fields::ZIP, zip)),
        Box::new(AddressExists::new(
            AddressFields {
                address: fields::ADDRESS,
                city: fields::CITY,
                zip: fields::ZIP,
                place_id: Some(fields::PLACE_ID),
            },
            address,
        )),
    ]
}

pub type OnboardingController = SubmissionController<FormView, ResetOnReject<FetchSubmit>>;

pub struct OnboardingViewModel {
    pub state: FormView,
    pub captcha: RecaptchaWidget,
    pub controller: OnboardingController,
}

impl OnboardingViewModel {
    pub fn new(config: &FormConfig) -> Self {
        let state = FormView::new(FORM_ID);
        let captcha = RecaptchaWidget::new();
        let verifier = Rc::new(config.verifier());
        let submitter = ResetOnReject {
            inner: FetchSubmit {
                form: state.form,
                action: config.action_or(DEFAULT_ACTION),
                location: FORM_ID.to_string(),
                timeout_ms: config.timeout_ms,
            },
            widget: captcha,
        };
        let controller = SubmissionController::new(
            "onboarding",
            state,
            submitter,
            pipeline(verifier.clone(), verifier, Rc::new(captcha)),
        );
        Self {
            state,
            captcha,
            controller,
        }
    }
}
