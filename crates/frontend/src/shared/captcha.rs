//! reCAPTCHA v2 checkbox widget
//!
//! The page loads `api.js?render=explicit`; each form renders its own widget
//! into a container it owns and keeps the widget id to query the token.

use async_trait::async_trait;
use leptos::html;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::shared::submission::{SubmitOutcome, Submitter};
use crate::shared::validation::CaptchaWidget;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = grecaptcha, js_name = render, catch)]
    fn grecaptcha_render(container: &web_sys::HtmlElement, params: &JsValue) -> Result<i32, JsValue>;

    #[wasm_bindgen(js_namespace = grecaptcha, js_name = getResponse, catch)]
    fn grecaptcha_get_response(widget_id: i32) -> Result<String, JsValue>;

    #[wasm_bindgen(js_namespace = grecaptcha, js_name = reset, catch)]
    fn grecaptcha_reset(widget_id: i32) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct RenderParams<'a> {
    sitekey: &'a str,
}

/// Handle on one rendered widget
#[derive(Clone, Copy)]
pub struct RecaptchaWidget {
    widget_id: RwSignal<Option<i32>>,
}

impl RecaptchaWidget {
    pub fn new() -> Self {
        Self {
            widget_id: RwSignal::new(None),
        }
    }

    fn render_into(&self, container: &web_sys::HtmlElement, sitekey: &str) {
        if self.widget_id.get_untracked().is_some() {
            return;
        }
        let params = match serde_wasm_bindgen::to_value(&RenderParams { sitekey }) {
            Ok(params) => params,
            Err(e) => {
                log::error!("reCAPTCHA params: {}", e);
                return;
            }
        };
        match grecaptcha_render(container, &params) {
            Ok(id) => self.widget_id.set(Some(id)),
            // Script missing or blocked; the presence step will keep failing.
            Err(e) => log::warn!("reCAPTCHA not available: {:?}", e),
        }
    }

    /// Clear the challenge so a new token is needed
    pub fn reset(&self) {
        if let Some(id) = self.widget_id.get_untracked() {
            if let Err(e) = grecaptcha_reset(id) {
                log::warn!("reCAPTCHA reset failed: {:?}", e);
            }
        }
    }
}

impl Default for RecaptchaWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptchaWidget for RecaptchaWidget {
    fn response_token(&self) -> Option<String> {
        let id = self.widget_id.get_untracked()?;
        grecaptcha_get_response(id)
            .ok()
            .filter(|token| !token.is_empty())
    }
}

/// Server-side verification consumes the token, so a refused submission
/// needs a fresh challenge before the next attempt.
pub struct ResetOnReject<D> {
    pub inner: D,
    pub widget: RecaptchaWidget,
}

#[async_trait(?Send)]
impl<D: Submitter> Submitter for ResetOnReject<D> {
    fn is_native(&self) -> bool {
        self.inner.is_native()
    }

    async fn submit(&self) -> SubmitOutcome {
        let outcome = self.inner.submit().await;
        if matches!(outcome, SubmitOutcome::Rejected(_)) {
            self.widget.reset();
        }
        outcome
    }
}

/// Widget container; `id` doubles as the error location for the CAPTCHA step
#[component]
pub fn Recaptcha(
    widget: RecaptchaWidget,
    #[prop(into)] id: String,
    sitekey: Option<String>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        if let (Some(el), Some(key)) = (container.get(), sitekey.as_deref()) {
            widget.render_into(&el, key);
        }
    });

    view! { <div id=id class="g-recaptcha" node_ref=container></div> }
}
