use std::rc::Rc;

use contracts::domain::a001_pickup_request::fields;
use contracts::domain::a002_pickup_slot::{format_pickup_date, format_time_range};

use crate::shared::api::{AddressVerifier, NativeSubmit, ZipVerifier};
use crate::shared::config::FormConfig;
use crate::shared::form_view::FormView;
use crate::shared::submission::{SubmissionController, ValidationStep};
use crate::shared::validation::{AddressExists, AddressFields, RequiredFields, ZipInServiceArea};

pub const FORM_ID: &str = "update-address-form";
pub const DEFAULT_ACTION: &str = "/update_address";

pub const SLOTTED: &[&str] = &[fields::ADDRESS, fields::CITY, fields::ZIPCODE];

/// This form names its ZIP control `zipcode`
pub fn pipeline(
    zip: Rc<dyn ZipVerifier>,
    address: Rc<dyn AddressVerifier>,
) -> Vec<Box<dyn ValidationStep>> {
    vec![
        Box::new(RequiredFields::new(vec![
            (fields::ADDRESS, "Address"),
            (fields::CITY, "City"),
            (fields::ZIPCODE, "Zip code"),
        ])),
        Box::new(ZipInServiceArea::new(fields::ZIPCODE, zip)),
        Box::new(AddressExists::new(
            AddressFields {
                address: fields::ADDRESS,
                city: fields::CITY,
                zip: fields::ZIPCODE,
                place_id: None,
            },
            address,
        )),
    ]
}

pub struct EditAddressViewModel {
    pub state: FormView,
    pub controller: SubmissionController<FormView, NativeSubmit>,
}

impl EditAddressViewModel {
    pub fn new(config: &FormConfig) -> Self {
        let state = FormView::new(FORM_ID);
        let verifier = Rc::new(config.verifier());
        let controller = SubmissionController::new(
            "edit-address",
            state,
            NativeSubmit {
                form: state.form,
                location: FORM_ID.to_string(),
            },
            pipeline(verifier.clone(), verifier),
        );
        Self { state, controller }
    }
}

/// Address line shown while not editing
pub fn address_line(config: &FormConfig) -> String {
    [&config.address, &config.city, &config.zipcode]
        .iter()
        .filter_map(|part| part.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// "Sunday, Jan. 12th between 8:00am-4:00pm"; raw values are shown when
/// they do not parse
pub fn pickup_line(date: Option<&str>, time: Option<&str>) -> Option<String> {
    let date = date.filter(|d| !d.trim().is_empty())?;
    let date_text = format_pickup_date(date).unwrap_or_else(|| date.to_string());
    match time.filter(|t| !t.trim().is_empty()) {
        Some(time) => {
            let time_text = format_time_range(time).unwrap_or_else(|| time.to_string());
            Some(format!("{} between {}", date_text, time_text))
        }
        None => Some(date_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::submission::Phase;
    use crate::shared::testing::{FakeAddress, FakeForm, FakeSubmitter, FakeZip};
    use futures::executor::block_on;

    #[test]
    fn test_zip_read_from_zipcode_field() {
        let zip = Rc::new(FakeZip::serving(&["94588"]));
        let address = Rc::new(FakeAddress::accepting(&["4000 Hopyard Rd"]));
        let submitter = Rc::new(FakeSubmitter::native());
        let form = FakeForm::with(&[
            ("request_id", "17"),
            ("address", "4000 Hopyard Rd"),
            ("city", "Pleasanton"),
            ("zipcode", "94588"),
            ("zip", "00000"),
        ]);
        let controller = SubmissionController::new(
            "edit-address",
            form,
            submitter.clone(),
            pipeline(zip.clone(), address.clone()),
        );

        block_on(controller.attempt());
        assert_eq!(controller.phase(), Phase::Submitting);
        assert_eq!(zip.queries(), vec!["94588".to_string()]);
        assert_eq!(
            address.requests()[0].full_addr,
            "4000 Hopyard Rd, Pleasanton, 94588"
        );
        assert_eq!(submitter.calls(), 1);
    }

    #[test]
    fn test_missing_zipcode_reported_under_its_own_name() {
        let zip = Rc::new(FakeZip::serving(&["94588"]));
        let controller = SubmissionController::new(
            "edit-address",
            FakeForm::with(&[("address", "4000 Hopyard Rd"), ("city", "Pleasanton")]),
            Rc::new(FakeSubmitter::native()),
            pipeline(zip.clone(), Rc::new(FakeAddress::accepting(&[]))),
        );

        block_on(controller.attempt());
        let session = controller.session();
        assert_eq!(session.pending_errors.len(), 1);
        assert_eq!(session.pending_errors[0].field, "zipcode");
        assert!(zip.queries().is_empty());
    }

    #[test]
    fn test_address_line_skips_blanks() {
        let config = FormConfig {
            address: Some("4000 Hopyard Rd".to_string()),
            city: Some(" ".to_string()),
            zipcode: Some("94588".to_string()),
            ..FormConfig::default()
        };
        assert_eq!(address_line(&config), "4000 Hopyard Rd, 94588");
    }

    #[test]
    fn test_pickup_line() {
        assert_eq!(
            pickup_line(Some("2025-01-12"), Some("08:00-16:00")).as_deref(),
            Some("Sunday, Jan. 12th between 8:00am-4:00pm")
        );
        assert_eq!(
            pickup_line(Some("2025-01-12"), None).as_deref(),
            Some("Sunday, Jan. 12th")
        );
        assert_eq!(
            pickup_line(Some("next week"), Some("mornings")).as_deref(),
            Some("next week between mornings")
        );
        assert_eq!(pickup_line(None, Some("08:00-16:00")), None);
    }
}
