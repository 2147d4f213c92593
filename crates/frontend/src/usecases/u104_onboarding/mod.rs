//! Donation onboarding form with address autocomplete. Posted in the
//! background; a success panel replaces the form.

pub mod view;
pub mod view_model;

pub use view::OnboardingForm;
