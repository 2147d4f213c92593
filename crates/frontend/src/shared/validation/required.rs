use async_trait::async_trait;

use crate::shared::submission::{
    messages, FieldError, FieldSource, StepFailure, StepOutcome, ValidationStep,
};

/// Every listed field must be non-blank. All missing fields are reported
/// together rather than one at a time.
pub struct RequiredFields {
    fields: Vec<(&'static str, &'static str)>,
}

impl RequiredFields {
    /// `fields` are (field name, label) pairs in display order
    pub fn new(fields: Vec<(&'static str, &'static str)>) -> Self {
        Self { fields }
    }
}

#[async_trait(?Send)]
impl ValidationStep for RequiredFields {
    fn name(&self) -> &'static str {
        "required-fields"
    }

    async fn check(&self, fields: &dyn FieldSource) -> StepOutcome {
        let missing: Vec<FieldError> = self
            .fields
            .iter()
            .filter(|(name, _)| fields.trimmed(name).is_empty())
            .map(|(name, label)| FieldError::new(*name, messages::required(label)))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(StepFailure::precondition(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::submission::FailureKind;
    use crate::shared::testing::FakeForm;
    use futures::executor::block_on;

    fn step() -> RequiredFields {
        RequiredFields::new(vec![("email", "Email"), ("address", "Address"), ("zip", "Zip code")])
    }

    #[test]
    fn test_reports_every_missing_field() {
        let form = FakeForm::with(&[("email", "   "), ("address", "1 Market St")]);
        let failure = block_on(step().check(&form)).unwrap_err();
        assert_eq!(failure.kind, FailureKind::Precondition);
        assert_eq!(
            failure.errors,
            vec![
                FieldError::new("email", "Email is required."),
                FieldError::new("zip", "Zip code is required."),
            ]
        );
    }

    #[test]
    fn test_passes_when_filled() {
        let form = FakeForm::with(&[("email", "a@b.co"), ("address", "1 Market St"), ("zip", "94105")]);
        assert!(block_on(step().check(&form)).is_ok());
    }
}
