//! Per-form configuration
//!
//! The server renders an empty mount element for every form and describes
//! the form with `data-*` attributes:
//!
//! ```html
//! <div id="init-form-root"
//!      data-action="/request_init"
//!      data-csrf-token="..."
//!      data-recaptcha-sitekey="..."
//!      data-zipcode="94566"></div>
//! ```

use contracts::domain::a002_pickup_slot::DayOption;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::shared::api::HttpVerifier;
use crate::shared::api_utils::csrf_token_from_page;

pub const DEFAULT_ZIP_ENDPOINT: &str = "/verify_zip";
pub const DEFAULT_ADDRESS_ENDPOINT: &str = "/api/validate_address";
pub const DEFAULT_TIMEOUT_MS: u32 = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FormConfig {
    /// Where the form posts; each form has its own fallback
    pub action: Option<String>,
    pub csrf_token: Option<String>,
    pub recaptcha_sitekey: Option<String>,
    pub zip_endpoint: String,
    pub address_endpoint: String,
    /// Client-side limit for each network step
    #[serde(deserialize_with = "u32_from_str")]
    pub timeout_ms: u32,

    // Prefills
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub request_id: Option<String>,
    pub page: Option<String>,
    pub pickup_date: Option<String>,
    pub pickup_time: Option<String>,
    /// JSON list of [`DayOption`] for the date selection form
    pub days: Option<String>,
    /// Where "keep my current date" posts on the edit-date page
    pub cancel_url: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            action: None,
            csrf_token: None,
            recaptcha_sitekey: None,
            zip_endpoint: DEFAULT_ZIP_ENDPOINT.to_string(),
            address_endpoint: DEFAULT_ADDRESS_ENDPOINT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            zipcode: None,
            city: None,
            address: None,
            request_id: None,
            page: None,
            pickup_date: None,
            pickup_time: None,
            days: None,
            cancel_url: None,
        }
    }
}

fn u32_from_str<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

impl FormConfig {
    /// Build from attribute (name, value) pairs; only `data-*` names count
    pub fn from_attributes<I>(attributes: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let map: Map<String, Value> = attributes
            .into_iter()
            .filter_map(|(name, value)| {
                name.strip_prefix("data-")
                    .map(|key| (key.to_string(), Value::String(value)))
            })
            .collect();
        serde_json::from_value(Value::Object(map))
            .map_err(|e| format!("Invalid form configuration: {}", e))
    }

    /// Read the mount element; a broken attribute falls back to defaults
    pub fn from_element(element: &web_sys::Element) -> Self {
        let names = element.get_attribute_names();
        let attributes = names
            .iter()
            .filter_map(|name| name.as_string())
            .filter_map(|name| {
                let value = element.get_attribute(&name)?;
                Some((name, value))
            });

        match Self::from_attributes(attributes) {
            Ok(config) => config,
            Err(e) => {
                log::error!("#{}: {}", element.id(), e);
                Self::default()
            }
        }
    }

    pub fn action_or(&self, fallback: &str) -> String {
        self.action
            .clone()
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Token from the mount element, else whatever the page carries
    pub fn csrf(&self) -> Option<String> {
        self.csrf_token
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(csrf_token_from_page)
    }

    pub fn verifier(&self) -> HttpVerifier {
        HttpVerifier {
            zip_endpoint: self.zip_endpoint.clone(),
            address_endpoint: self.address_endpoint.clone(),
            csrf_token: self.csrf(),
            timeout_ms: self.timeout_ms,
        }
    }

    /// Offered pickup days; malformed JSON yields none
    pub fn day_options(&self) -> Vec<DayOption> {
        let Some(raw) = self.days.as_deref() else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<DayOption>>(raw) {
            Ok(days) => days,
            Err(e) => {
                log::error!("Invalid data-days: {}", e);
                Vec::new()
            }
        }
    }

    /// Cancel-edit target; a blank attribute means the page has none
    pub fn cancel_url(&self) -> Option<String> {
        self.cancel_url.clone().filter(|url| !url.trim().is_empty())
    }

    pub fn prefill(value: &Option<String>) -> String {
        value.clone().unwrap_or_default()
    }
}
