use serde::{Deserialize, Serialize};

// ============================================================================
// ZIP verification: GET /verify_zip?zipcode=<zip>
// ============================================================================

/// Answer of the service-area check for a single postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipCheckResponse {
    pub valid: bool,
    /// Human readable reason, empty or absent when the code is serviced
    #[serde(default)]
    pub reason: Option<String>,
}

impl ZipCheckResponse {
    /// Reason to show the user, `None` when the server sent nothing usable
    pub fn reason_text(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

// ============================================================================
// Address verification: POST /api/validate_address
// ============================================================================

/// Body of the address-existence check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCheckRequest {
    pub full_addr: String,
    /// Place id picked by the autocomplete widget, `null` when typed by hand
    pub place_id: Option<String>,
    pub city: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCheckResponse {
    pub valid: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AddressCheckResponse {
    pub fn message_text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}
