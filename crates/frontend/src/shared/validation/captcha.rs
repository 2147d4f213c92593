use async_trait::async_trait;
use std::rc::Rc;

use crate::shared::submission::{
    messages, FieldError, FieldSource, StepFailure, StepOutcome, ValidationStep,
};

/// Third-party challenge widget on the page
pub trait CaptchaWidget {
    /// Response token, `None` or empty while the challenge is unsolved
    fn response_token(&self) -> Option<String>;
}

/// Local gate: no network call, just "has the user solved the challenge"
pub struct CaptchaPresence {
    widget: Rc<dyn CaptchaWidget>,
    location: &'static str,
}

impl CaptchaPresence {
    /// `location` is where the message shows, usually the widget container
    pub fn new(widget: Rc<dyn CaptchaWidget>, location: &'static str) -> Self {
        Self { widget, location }
    }
}

#[async_trait(?Send)]
impl ValidationStep for CaptchaPresence {
    fn name(&self) -> &'static str {
        "captcha-presence"
    }

    async fn check(&self, _fields: &dyn FieldSource) -> StepOutcome {
        let solved = self
            .widget
            .response_token()
            .is_some_and(|token| !token.is_empty());
        if solved {
            Ok(())
        } else {
            Err(StepFailure::precondition(vec![FieldError::new(
                self.location,
                messages::CAPTCHA_REQUIRED,
            )]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{FakeCaptcha, FakeForm};
    use futures::executor::block_on;

    #[test]
    fn test_missing_token_fails_at_location() {
        let step = CaptchaPresence::new(Rc::new(FakeCaptcha::unsolved()), "recaptcha-form");
        let failure = block_on(step.check(&FakeForm::with(&[]))).unwrap_err();
        assert_eq!(
            failure.errors,
            vec![FieldError::new("recaptcha-form", messages::CAPTCHA_REQUIRED)]
        );
    }

    #[test]
    fn test_empty_token_fails() {
        let captcha = Rc::new(FakeCaptcha::unsolved());
        captcha.solve("");
        let step = CaptchaPresence::new(captcha, "recaptcha-form");
        assert!(block_on(step.check(&FakeForm::with(&[]))).is_err());
    }

    #[test]
    fn test_token_passes() {
        let step = CaptchaPresence::new(Rc::new(FakeCaptcha::solved()), "recaptcha-form");
        assert!(block_on(step.check(&FakeForm::with(&[]))).is_ok());
    }
}
