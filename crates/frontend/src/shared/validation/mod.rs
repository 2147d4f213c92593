//! Pipeline steps shared by the pickup forms
//!
//! Cheap local checks (required fields, gate access, CAPTCHA presence) come
//! first; network checks follow, narrower (ZIP) before broader (address).

mod address;
mod captcha;
mod gate;
mod required;
mod zip;

pub use address::{compose_full_address, AddressExists, AddressFields};
pub use captcha::{CaptchaPresence, CaptchaWidget};
pub use gate::GateAccess;
pub use required::RequiredFields;
pub use zip::ZipInServiceArea;
