use async_trait::async_trait;
use contracts::shared::verification::{AddressCheckRequest, AddressCheckResponse, ZipCheckResponse};
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::{api_url, with_timeout};

/// Anything that kept a request from producing a usable answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("no response after {0} ms")]
    Timeout(u32),
}

/// Read-only service-area lookup for a postal code
#[async_trait(?Send)]
pub trait ZipVerifier {
    async fn verify_zip(&self, zip: &str) -> Result<ZipCheckResponse, ApiError>;
}

/// Geocoding check for a full street address
#[async_trait(?Send)]
pub trait AddressVerifier {
    async fn verify_address(
        &self,
        request: &AddressCheckRequest,
    ) -> Result<AddressCheckResponse, ApiError>;
}

/// Both checks against the pickup server
#[derive(Debug, Clone)]
pub struct HttpVerifier {
    pub zip_endpoint: String,
    pub address_endpoint: String,
    pub csrf_token: Option<String>,
    pub timeout_ms: u32,
}

impl HttpVerifier {
    fn zip_url(&self, zip: &str) -> String {
        let separator = if self.zip_endpoint.contains('?') { '&' } else { '?' };
        api_url(&format!(
            "{}{}zipcode={}",
            self.zip_endpoint,
            separator,
            urlencoding::encode(zip)
        ))
    }
}

#[async_trait(?Send)]
impl ZipVerifier for HttpVerifier {
    async fn verify_zip(&self, zip: &str) -> Result<ZipCheckResponse, ApiError> {
        let url = self.zip_url(zip);
        with_timeout(self.timeout_ms, async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(ApiError::Status(response.status()));
            }

            response
                .json::<ZipCheckResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await
    }
}

#[async_trait(?Send)]
impl AddressVerifier for HttpVerifier {
    async fn verify_address(
        &self,
        request: &AddressCheckRequest,
    ) -> Result<AddressCheckResponse, ApiError> {
        let url = api_url(&self.address_endpoint);
        let token = self.csrf_token.clone().unwrap_or_default();
        with_timeout(self.timeout_ms, async move {
            let response = Request::post(&url)
                .header("X-CSRFToken", &token)
                .json(request)
                .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(ApiError::Status(response.status()));
            }

            response
                .json::<AddressCheckResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await
    }
}
