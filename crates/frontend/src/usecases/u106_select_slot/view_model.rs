use contracts::domain::a001_pickup_request::fields;
use contracts::domain::a002_pickup_slot::{selection_info, DayOption, DEFAULT_TIME_RANGE};

use crate::shared::api::NativeSubmit;
use crate::shared::form_view::FormView;
use crate::shared::submission::{SubmissionController, ValidationStep};
use crate::shared::validation::RequiredFields;

pub const FORM_ID: &str = "date-form";
pub const DEFAULT_ACTION: &str = "/date";

pub fn pipeline() -> Vec<Box<dyn ValidationStep>> {
    vec![Box::new(RequiredFields::new(vec![
        (fields::CHOSEN_DATE, "Pickup date"),
        (fields::CHOSEN_TIME, "Pickup time"),
    ]))]
}

/// At most one offered day is chosen at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotSelection {
    chosen: Option<DayOption>,
}

impl SlotSelection {
    /// Clicking the chosen day again clears the choice; unavailable days
    /// cannot be chosen.
    pub fn toggle(&mut self, day: &DayOption) {
        if !day.available {
            return;
        }
        if self.is_chosen(&day.date) {
            self.chosen = None;
        } else {
            self.chosen = Some(day.clone());
        }
    }

    pub fn is_chosen(&self, date: &str) -> bool {
        self.chosen.as_ref().is_some_and(|d| d.date == date)
    }

    pub fn has_choice(&self) -> bool {
        self.chosen.is_some()
    }

    /// Value of the hidden `chosen_date` input
    pub fn chosen_date(&self) -> String {
        self.chosen
            .as_ref()
            .map(|d| d.date.clone())
            .unwrap_or_default()
    }

    /// Value of the hidden `chosen_time` input
    pub fn chosen_time(&self) -> &'static str {
        if self.chosen.is_some() {
            DEFAULT_TIME_RANGE
        } else {
            ""
        }
    }

    pub fn info(&self) -> Option<String> {
        self.chosen.as_ref().map(|d| selection_info(d.display_label()))
    }
}

pub struct SelectSlotViewModel {
    pub state: FormView,
    pub controller: SubmissionController<FormView, NativeSubmit>,
}

impl SelectSlotViewModel {
    pub fn new() -> Self {
        let state = FormView::new(FORM_ID);
        let controller = SubmissionController::new(
            "select-slot",
            state,
            NativeSubmit {
                form: state.form,
                location: FORM_ID.to_string(),
            },
            pipeline(),
        );
        Self { state, controller }
    }
}

impl Default for SelectSlotViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub const CANCEL_FORM_ID: &str = "cancel-edit-date-form";

/// "Keep my current date": posts `request_id` and the CSRF token to the
/// page's cancel URL. No steps; the guard keeps it to one post.
pub struct CancelEditViewModel {
    pub state: FormView,
    pub controller: SubmissionController<FormView, NativeSubmit>,
}

impl CancelEditViewModel {
    pub fn new() -> Self {
        let state = FormView::new(CANCEL_FORM_ID);
        let controller = SubmissionController::new(
            "cancel-edit-date",
            state,
            NativeSubmit {
                form: state.form,
                location: CANCEL_FORM_ID.to_string(),
            },
            Vec::new(),
        );
        Self { state, controller }
    }
}

impl Default for CancelEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}
