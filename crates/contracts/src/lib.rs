//! Wire shapes and pure domain helpers shared by the pickup forms.

pub mod domain;
pub mod shared;
