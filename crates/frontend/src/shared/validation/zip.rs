use async_trait::async_trait;
use std::rc::Rc;

use crate::shared::api::ZipVerifier;
use crate::shared::submission::{messages, FieldSource, StepFailure, StepOutcome, ValidationStep};

/// Asks the server whether the postal code is inside the serviced area.
/// Fails closed: any transport problem is a failure of this step.
pub struct ZipInServiceArea {
    field: &'static str,
    verifier: Rc<dyn ZipVerifier>,
}

impl ZipInServiceArea {
    /// `field` is the form's postal-code control (`zip` or `zipcode`)
    pub fn new(field: &'static str, verifier: Rc<dyn ZipVerifier>) -> Self {
        Self { field, verifier }
    }
}

#[async_trait(?Send)]
impl ValidationStep for ZipInServiceArea {
    fn name(&self) -> &'static str {
        "zip-range"
    }

    async fn check(&self, fields: &dyn FieldSource) -> StepOutcome {
        let zip = fields.trimmed(self.field);

        match self.verifier.verify_zip(&zip).await {
            Ok(answer) if answer.valid => Ok(()),
            Ok(answer) => {
                let reason = answer.reason_text().unwrap_or(messages::ZIP_INVALID);
                Err(StepFailure::rejected(self.field, messages::normalize(reason)))
            }
            Err(e) => {
                log::error!("zip check for {:?} failed: {}", zip, e);
                Err(StepFailure::transport(self.field, messages::ZIP_UNAVAILABLE))
            }
        }
    }
}
