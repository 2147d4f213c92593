use async_trait::async_trait;
use contracts::domain::a001_pickup_request::{fields as names, is_checked, GateOption};

use crate::shared::submission::{
    messages, FieldError, FieldSource, StepFailure, StepOutcome, ValidationStep,
};

/// For gated communities the driver needs a way in: an access option must
/// be chosen, and the "code" option needs the code itself.
pub struct GateAccess;

#[async_trait(?Send)]
impl ValidationStep for GateAccess {
    fn name(&self) -> &'static str {
        "gate-access"
    }

    async fn check(&self, fields: &dyn FieldSource) -> StepOutcome {
        if !is_checked(&fields.trimmed(names::GATED)) {
            return Ok(());
        }

        match GateOption::from_value(&fields.trimmed(names::GATED_OPTION)) {
            None => Err(StepFailure::precondition(vec![FieldError::new(
                names::GATED_OPTION,
                messages::GATE_OPTION_REQUIRED,
            )])),
            Some(GateOption::Code) if fields.trimmed(names::GATE_CODE).is_empty() => {
                Err(StepFailure::precondition(vec![FieldError::new(
                    names::GATE_CODE,
                    messages::GATE_CODE_REQUIRED,
                )]))
            }
            Some(_) => Ok(()),
        }
    }
}
