//! Initial pickup request
//!
//! Full contact and address form. Posts natively to the request endpoint
//! once the address is known to be serviceable.

pub mod view;
pub mod view_model;

pub use view::RequestPickupForm;
