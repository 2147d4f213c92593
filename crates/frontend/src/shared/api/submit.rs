use async_trait::async_trait;
use contracts::shared::submission::SubmissionResponse;
use gloo_net::http::Request;
use leptos::html;
use leptos::prelude::*;

use super::verification::ApiError;
use crate::shared::api_utils::{api_url, with_timeout};
use crate::shared::submission::{messages, FieldError, SubmitOutcome, Submitter};

/// Re-triggers the form's own submission so the browser posts it and
/// navigates to whatever the server answers.
pub struct NativeSubmit {
    pub form: NodeRef<html::Form>,
    /// Where to report a form that is no longer on the page
    pub location: String,
}

#[async_trait(?Send)]
impl Submitter for NativeSubmit {
    fn is_native(&self) -> bool {
        true
    }

    async fn submit(&self) -> SubmitOutcome {
        let Some(form) = self.form.get_untracked() else {
            log::error!("form {} is not mounted", self.location);
            return SubmitOutcome::Rejected(vec![FieldError::new(
                &self.location,
                messages::SUBMIT_UNAVAILABLE,
            )]);
        };

        // requestSubmit fires the submit event again and the guard lets it through.
        // Older browsers only have submit(), which posts without firing it.
        if form.request_submit().is_err() {
            if let Err(e) = form.submit() {
                log::error!("form {} could not be submitted: {:?}", self.location, e);
                return SubmitOutcome::Rejected(vec![FieldError::new(
                    &self.location,
                    messages::SUBMIT_UNAVAILABLE,
                )]);
            }
        }
        SubmitOutcome::Dispatched
    }
}

/// Posts the form's fields (CSRF and CAPTCHA tokens included) with fetch
/// and stays on the page.
pub struct FetchSubmit {
    pub form: NodeRef<html::Form>,
    pub action: String,
    pub location: String,
    pub timeout_ms: u32,
}

#[async_trait(?Send)]
impl Submitter for FetchSubmit {
    fn is_native(&self) -> bool {
        false
    }

    async fn submit(&self) -> SubmitOutcome {
        let unavailable = || {
            SubmitOutcome::Rejected(vec![FieldError::new(
                &self.location,
                messages::SUBMIT_UNAVAILABLE,
            )])
        };

        let Some(form) = self.form.get_untracked() else {
            log::error!("form {} is not mounted", self.location);
            return unavailable();
        };
        let body = match web_sys::FormData::new_with_form(&form) {
            Ok(body) => body,
            Err(e) => {
                log::error!("failed to read form {}: {:?}", self.location, e);
                return unavailable();
            }
        };

        match post_form(&api_url(&self.action), body, self.timeout_ms).await {
            Ok(response) if response.is_accepted() => {
                SubmitOutcome::Accepted(response.reason_text().map(str::to_string))
            }
            Ok(response) => SubmitOutcome::Rejected(rejection_errors(&response, &self.location)),
            Err(e) => {
                log::error!("submission of {} failed: {}", self.location, e);
                unavailable()
            }
        }
    }
}

async fn post_form(
    url: &str,
    body: web_sys::FormData,
    timeout_ms: u32,
) -> Result<SubmissionResponse, ApiError> {
    let request = Request::post(url)
        .body(body)
        .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?;

    with_timeout(timeout_ms, async move {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<SubmissionResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    })
    .await
}

/// Field errors from a refused submission. Falls back to the server's reason,
/// then to a generic message, both shown at `location`.
pub fn rejection_errors(response: &SubmissionResponse, location: &str) -> Vec<FieldError> {
    let fields: Vec<FieldError> = response
        .field_messages()
        .into_iter()
        .map(|(field, message)| FieldError::new(field, messages::normalize(&message)))
        .collect();
    if !fields.is_empty() {
        return fields;
    }

    let message = response
        .reason_text()
        .map(messages::normalize)
        .unwrap_or_else(|| messages::SUBMIT_FAILED.to_string());
    vec![FieldError::new(location, message)]
}
