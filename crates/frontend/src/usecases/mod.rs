pub mod u101_request_pickup;
pub mod u102_edit_address;
pub mod u103_contact;
pub mod u104_onboarding;
pub mod u105_cancel_request;
pub mod u106_select_slot;
pub mod u107_zip_gate;
