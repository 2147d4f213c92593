//! Contact form, posted in the background

pub mod view;
pub mod view_model;

pub use view::ContactForm;
