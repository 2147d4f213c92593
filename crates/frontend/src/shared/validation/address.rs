use async_trait::async_trait;
use contracts::shared::verification::AddressCheckRequest;
use std::rc::Rc;

use crate::shared::api::AddressVerifier;
use crate::shared::submission::{messages, FieldSource, StepFailure, StepOutcome, ValidationStep};

/// Names of the controls the address check reads
#[derive(Debug, Clone, Copy)]
pub struct AddressFields {
    pub address: &'static str,
    pub city: &'static str,
    pub zip: &'static str,
    /// Hidden control filled by the autocomplete widget, if the form has one
    pub place_id: Option<&'static str>,
}

/// "<address>, <city>, <zip>" with blank parts left out
pub fn compose_full_address(address: &str, city: &str, zip: &str) -> String {
    [address, city, zip]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Asks the server to geocode the address. Fails closed.
pub struct AddressExists {
    fields: AddressFields,
    verifier: Rc<dyn AddressVerifier>,
}

impl AddressExists {
    pub fn new(fields: AddressFields, verifier: Rc<dyn AddressVerifier>) -> Self {
        Self { fields, verifier }
    }

    fn request(&self, fields: &dyn FieldSource) -> AddressCheckRequest {
        let address = fields.trimmed(self.fields.address);
        let city = fields.trimmed(self.fields.city);
        let zip = fields.trimmed(self.fields.zip);
        let place_id = self
            .fields
            .place_id
            .map(|name| fields.trimmed(name))
            .filter(|id| !id.is_empty());

        AddressCheckRequest {
            full_addr: compose_full_address(&address, &city, &zip),
            place_id,
            city,
            zip,
        }
    }
}

#[async_trait(?Send)]
impl ValidationStep for AddressExists {
    fn name(&self) -> &'static str {
        "address-exists"
    }

    async fn check(&self, fields: &dyn FieldSource) -> StepOutcome {
        let request = self.request(fields);

        match self.verifier.verify_address(&request).await {
            Ok(answer) if answer.valid => Ok(()),
            Ok(answer) => {
                let message = answer.message_text().unwrap_or(messages::ADDRESS_INVALID);
                Err(StepFailure::rejected(
                    self.fields.address,
                    messages::normalize(message),
                ))
            }
            Err(e) => {
                log::error!("address check for {:?} failed: {}", request.full_addr, e);
                Err(StepFailure::transport(
                    self.fields.address,
                    messages::ADDRESS_UNAVAILABLE,
                ))
            }
        }
    }
}
