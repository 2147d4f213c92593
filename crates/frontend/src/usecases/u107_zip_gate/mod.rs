//! Landing-page ZIP check that leads into the request form

pub mod view;
pub mod view_model;

pub use view::ZipGateForm;
