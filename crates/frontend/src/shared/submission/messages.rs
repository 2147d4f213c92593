//! Wording shown next to fields. Transport failures get their own messages
//! so the user can tell a flaky connection from a rejected value.

pub const CAPTCHA_REQUIRED: &str =
    "Please click the \u{201c}I\u{2019}m not a robot\u{201d} box. Refreshing can resolve most issues.";

pub const ZIP_INVALID: &str =
    "Please enter a zip code. This must be 5 digits and cannot contain any letters.";
pub const ZIP_UNAVAILABLE: &str = "Error verifying ZIP code. Please try again.";

pub const ADDRESS_INVALID: &str =
    "We couldn't verify that address. Please check it and try again.";
pub const ADDRESS_UNAVAILABLE: &str =
    "We couldn't reach the address service. Please try again in a moment.";

pub const SUBMIT_FAILED: &str = "Submission failed. Please try again.";
pub const SUBMIT_UNAVAILABLE: &str = "An error occurred. Please try again.";

pub const GATE_OPTION_REQUIRED: &str = "Please tell us how our driver can get through the gate.";
pub const GATE_CODE_REQUIRED: &str = "Please enter the gate code.";

/// reCAPTCHA's own wording when the token is missing server-side
const RECAPTCHA_MISSING: &str = "The response parameter is missing.";

pub fn required(label: &str) -> String {
    format!("{} is required.", label)
}

/// Replace known raw server phrases with wording meant for people
pub fn normalize(message: &str) -> String {
    let message = message.trim();
    if message == RECAPTCHA_MISSING {
        CAPTCHA_REQUIRED.to_string()
    } else {
        message.to_string()
    }
}
