pub mod api;
pub mod api_utils;
pub mod autocomplete;
pub mod captcha;
pub mod config;
pub mod form_view;
pub mod submission;
pub mod validation;

#[cfg(test)]
pub mod testing;
