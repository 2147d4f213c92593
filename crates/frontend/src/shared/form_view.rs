//! Leptos side of a guarded form
//!
//! `FormView` is the `FormSurface` every form component hands to its
//! controller. It mirrors the session into signals; the markup reads only
//! those signals, so what is on screen is always a function of the session.

use contracts::domain::a001_pickup_request::fields;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::submission::{
    FieldError, FieldSource, FormSession, FormSurface, Phase, SubmissionController,
    SubmitDisposition, Submitter,
};

#[derive(Clone, Copy)]
pub struct FormView {
    /// Error location for messages that have no field slot
    pub location: &'static str,
    pub form: NodeRef<html::Form>,
    pub phase: RwSignal<Phase>,
    pub errors: RwSignal<Vec<FieldError>>,
    pub notice: RwSignal<Option<String>>,
}

impl FormView {
    pub fn new(location: &'static str) -> Self {
        Self {
            location,
            form: NodeRef::new(),
            phase: RwSignal::new(Phase::Idle),
            errors: RwSignal::new(Vec::new()),
            notice: RwSignal::new(None),
        }
    }

    /// Message currently shown for `field`
    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.with(|errors| {
            errors
                .iter()
                .find(|e| e.field == field)
                .map(|e| e.message.clone())
        })
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get().is_busy()
    }
}

impl FieldSource for FormView {
    /// Reads the form as the browser would post it, at call time
    fn value(&self, name: &str) -> Option<String> {
        let form = self.form.get_untracked()?;
        let data = web_sys::FormData::new_with_form(&form).ok()?;
        data.get(name).as_string()
    }
}

impl FormSurface for FormView {
    fn render(&self, session: &FormSession) {
        self.phase.set(session.phase);
        self.errors.set(session.pending_errors.clone());
        self.notice.set(session.notice.clone());

        if let Some(first) = session.pending_errors.first() {
            scroll_to_error(scroll_targets(&first.field, self.location));
        }
    }
}

pub fn error_id(field: &str) -> String {
    format!("err-{}", field)
}

/// Ids to try, in order, when scrolling to an error. Fields without a slot
/// of their own are drawn at the form's location.
pub fn scroll_targets(field: &str, location: &str) -> Vec<String> {
    let mut targets = vec![error_id(field)];
    if field != location {
        targets.push(error_id(location));
    }
    targets
}

/// Bring the error into view once the markup for it exists
fn scroll_to_error(targets: Vec<String>) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        let Some(element) = targets
            .iter()
            .find_map(|id| element_by_id::<web_sys::Element>(id))
        else {
            log::debug!("no error element among {:?}", targets);
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Center);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

/// Submit handler shared by every guarded form
pub fn on_submit<D>(
    controller: SubmissionController<FormView, D>,
) -> impl Fn(leptos::ev::SubmitEvent) + 'static
where
    D: Submitter + 'static,
{
    move |ev: leptos::ev::SubmitEvent| match controller.intercept() {
        SubmitDisposition::PassThrough => {}
        SubmitDisposition::Suppress => ev.prevent_default(),
        SubmitDisposition::Validate => {
            ev.prevent_default();
            let controller = controller.clone();
            leptos::task::spawn_local(async move {
                controller.run().await;
            });
        }
    }
}

/// Inline message right after a field; renders nothing when the field is fine
#[component]
pub fn FieldErrorSlot(state: FormView, #[prop(into)] field: String) -> impl IntoView {
    let id = error_id(&field);
    let class = format!("user-notice-warn {}", id);
    move || {
        state.error_for(&field).map(|message| {
            view! {
                <div id=id.clone() class=class.clone()>{message}</div>
            }
        })
    }
}

/// Errors for locations that have no slot of their own (server-side field
/// names the form does not render, or the form itself)
#[component]
pub fn OtherErrors(
    state: FormView,
    #[prop(into)] location: String,
    known: &'static [&'static str],
) -> impl IntoView {
    let id = error_id(&location);
    move || {
        let messages: Vec<String> = state.errors.with(|errors| {
            errors
                .iter()
                .filter(|e| !known.contains(&e.field.as_str()))
                .map(|e| e.message.clone())
                .collect()
        });
        (!messages.is_empty()).then(|| {
            view! {
                <div id=id.clone() class="user-notice-warn">{messages.join(" ")}</div>
            }
        })
    }
}

/// Spinner shown while validating or submitting
#[component]
pub fn Loader(state: FormView) -> impl IntoView {
    view! {
        <span
            class="loader"
            style:display=move || if state.is_busy() { "inline-block" } else { "none" }
        ></span>
    }
}

/// Hidden anti-forgery input posted with the form
#[component]
pub fn CsrfInput(token: Option<String>) -> impl IntoView {
    view! { <input type="hidden" name=fields::CSRF_TOKEN value=token.unwrap_or_default() /> }
}

/// Set a control's value directly (autocomplete fills, slot selection)
pub fn set_input_value(input: &NodeRef<html::Input>, value: &str) {
    if let Some(el) = input.get_untracked() {
        el.set_value(value);
    }
}

/// Navigate the whole page
pub fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

/// Element by id as a specific element type
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unslotted_field_falls_back_to_form_location() {
        assert_eq!(
            scroll_targets("phone", "init-form-info"),
            vec!["err-phone".to_string(), "err-init-form-info".to_string()]
        );
    }

    #[test]
    fn test_form_level_error_has_single_target() {
        assert_eq!(
            scroll_targets("contact-form", "contact-form"),
            vec!["err-contact-form".to_string()]
        );
    }
}
