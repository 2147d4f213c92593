//! Guarded multi-step form submission
//!
//! - step.rs: `ValidationStep` trait, field access and failure types
//! - session.rs: per-form `FormSession` and its `Phase`
//! - surface.rs: seams to the page (`FormSurface`, `Submitter`)
//! - controller.rs: `SubmissionController` driving one form
//! - messages.rs: user-facing wording shared by the steps

mod controller;
pub mod messages;
mod session;
mod step;
mod surface;

pub use controller::{SubmissionController, SubmitDisposition};
pub use session::{FormSession, Phase};
pub use step::{FailureKind, FieldError, FieldSource, StepFailure, StepOutcome, ValidationStep};
pub use surface::{FormSurface, SubmitOutcome, Submitter};
