use serde::{Deserialize, Serialize};

// ============================================================================
// Form field names as the server reads them
// ============================================================================

pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const ZIP: &str = "zip";
    /// The edit-address form names its postal code `zipcode`
    pub const ZIPCODE: &str = "zipcode";
    pub const PLACE_ID: &str = "place_id";
    pub const NOTES: &str = "notes";
    pub const GATED: &str = "gated";
    pub const GATED_OPTION: &str = "selectedGatedOption";
    pub const GATE_CODE: &str = "finalGateCode";
    pub const NOTICE: &str = "finalNotice";
    pub const REQUEST_ID: &str = "request_id";
    pub const PAGE: &str = "page";
    pub const CHOSEN_DATE: &str = "chosen_date";
    pub const CHOSEN_TIME: &str = "chosen_time";
    pub const NAME: &str = "name";
    pub const MESSAGE: &str = "message";
    pub const CSRF_TOKEN: &str = "csrf_token";
}

// ============================================================================
// Gated community access
// ============================================================================

/// How the driver gets through a gated community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateOption {
    /// Resident provides a gate code
    Code,
    /// Resident uploads a QR code
    Qr,
    /// Resident notifies the community access attendant
    Notice,
}

impl GateOption {
    pub const ALL: [GateOption; 3] = [GateOption::Code, GateOption::Qr, GateOption::Notice];

    pub fn value(&self) -> &'static str {
        match self {
            GateOption::Code => "code",
            GateOption::Qr => "qr",
            GateOption::Notice => "notice",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GateOption::Code => "Provide a gate code",
            GateOption::Qr => "Upload a QR code",
            GateOption::Notice => "I will notify our community access attendant",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value.trim())
    }
}

/// Value the `gated` checkbox posts when checked; the server compares against it
pub const GATED_VALUE: &str = "gated";

/// Value of the hidden `finalNotice` input when the attendant will be notified
pub const NOTICE_VALUE: &str = "true";

/// Checkbox values the browser may post for a checked `gated` box
pub fn is_checked(value: &str) -> bool {
    matches!(value.trim(), GATED_VALUE | "y" | "on" | "true" | "1")
}
