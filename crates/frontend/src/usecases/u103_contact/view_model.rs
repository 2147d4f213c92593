use std::rc::Rc;

use contracts::domain::a001_pickup_request::fields;

use crate::shared::api::FetchSubmit;
use crate::shared::captcha::{RecaptchaWidget, ResetOnReject};
use crate::shared::config::FormConfig;
use crate::shared::form_view::FormView;
use crate::shared::submission::{SubmissionController, ValidationStep};
use crate::shared::validation::{CaptchaPresence, CaptchaWidget, RequiredFields};

pub const FORM_ID: &str = "contact-form";
pub const CAPTCHA_ID: &str = "recaptcha-contact";
pub const DEFAULT_ACTION: &str = "/contact";

pub const SLOTTED: &[&str] = &[fields::NAME, fields::EMAIL, fields::MESSAGE, CAPTCHA_ID];

pub fn pipeline(captcha: Rc<dyn CaptchaWidget>) -> Vec<Box<dyn ValidationStep>> {
    vec![
        Box::new(RequiredFields::new(vec![
            (fields::NAME, "Name"),
            (fields::EMAIL, "Email"),
            (fields::MESSAGE, "Message"),
        ])),
        Box::new(CaptchaPresence::new(captcha, CAPTCHA_ID)),
    ]
}

pub type ContactController = SubmissionController<FormView, ResetOnReject<FetchSubmit>>;

pub struct ContactViewModel {
    pub state: FormView,
    pub captcha: RecaptchaWidget,
    pub controller: ContactController,
}

impl ContactViewModel {
    pub fn new(config: &FormConfig) -> Self {
        let state = FormView::new(FORM_ID);
        let captcha = RecaptchaWidget::new();
        let submitter = ResetOnReject {
            inner: FetchSubmit {
                form: state.form,
                action: config.action_or(DEFAULT_ACTION),
                location: FORM_ID.to_string(),
                timeout_ms: config.timeout_ms,
            },
            widget: captcha,
        };
        let controller =
            SubmissionController::new("contact", state, submitter, pipeline(Rc::new(captcha)));
        Self {
            state,
            captcha,
            controller,
        }
    }
}
