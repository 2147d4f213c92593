//! Cancel a scheduled pickup behind a confirmation step

pub mod view;
pub mod view_model;

pub use view::CancelRequestForm;
