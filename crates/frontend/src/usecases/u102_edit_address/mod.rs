//! Pickup summary with in-place address editing

pub mod view;
pub mod view_model;

pub use view::{EditAddressForm, PickupSummary};
