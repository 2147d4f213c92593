//! HTTP adapters for the external collaborators
//!
//! - verification.rs: ZIP and address checks used by the validation steps
//! - submit.rs: the two ways a form reaches the server

pub mod submit;
pub mod verification;

pub use submit::{FetchSubmit, NativeSubmit};
pub use verification::{AddressVerifier, ApiError, HttpVerifier, ZipVerifier};
