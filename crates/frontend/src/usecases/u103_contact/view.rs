use contracts::domain::a001_pickup_request::fields;
use leptos::prelude::*;

use super::view_model::{ContactViewModel, CAPTCHA_ID, DEFAULT_ACTION, FORM_ID, SLOTTED};
use crate::shared::captcha::Recaptcha;
use crate::shared::config::FormConfig;
use crate::shared::form_view::{
    on_submit, reload_page, CsrfInput, FieldErrorSlot, Loader, OtherErrors,
};
use crate::shared::submission::Phase;

const CONFIRMATION: &str = "Thank you! Your message has been sent.";

#[component]
pub fn ContactForm(config: FormConfig) -> impl IntoView {
    let vm = ContactViewModel::new(&config);
    let state = vm.state;
    let sent = move || state.phase.get() == Phase::Submitted;

    view! {
        <form
            id=FORM_ID
            method="post"
            action=config.action_or(DEFAULT_ACTION)
            novalidate=true
            node_ref=state.form
            style:display=move || if sent() { "none" } else { "block" }
            on:submit=on_submit(vm.controller.clone())
        >
            <CsrfInput token=config.csrf() />

            <div class="form-group">
                <label for="contact-name">"Name"</label>
                <input type="text" id="contact-name" name=fields::NAME autocomplete="name" />
                <FieldErrorSlot state=state field=fields::NAME />
            </div>
            <div class="form-group">
                <label for="contact-email">"Email"</label>
                <input type="email" id="contact-email" name=fields::EMAIL autocomplete="email" />
                <FieldErrorSlot state=state field=fields::EMAIL />
            </div>
            <div class="form-group">
                <label for="contact-message">"Message"</label>
                <textarea id="contact-message" name=fields::MESSAGE rows="5"></textarea>
                <FieldErrorSlot state=state field=fields::MESSAGE />
            </div>

            <Recaptcha widget=vm.captcha id=CAPTCHA_ID sitekey=config.recaptcha_sitekey.clone() />
            <FieldErrorSlot state=state field=CAPTCHA_ID />
            <OtherErrors state=state location=FORM_ID known=SLOTTED />

            <button type="submit" class="btn btn-primary" disabled=move || state.is_busy()>
                "Send"
                <Loader state=state />
            </button>
        </form>

        <div class="contact-confirmation" style:display=move || if sent() { "block" } else { "none" }>
            <p>{move || state.notice.get().unwrap_or_else(|| CONFIRMATION.to_string())}</p>
            <button type="button" class="btn btn-secondary" on:click=move |_| reload_page()>
                "Send another message"
            </button>
        </div>
    }
}
