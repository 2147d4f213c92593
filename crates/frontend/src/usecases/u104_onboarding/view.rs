use contracts::domain::a001_pickup_request::fields;
use leptos::prelude::*;

use super::view_model::{OnboardingViewModel, CAPTCHA_ID, DEFAULT_ACTION, FORM_ID, SLOTTED};
use crate::shared::autocomplete::{bind_autocomplete, AddressInputs};
use crate::shared::captcha::Recaptcha;
use crate::shared::config::FormConfig;
use crate::shared::form_view::{on_submit, CsrfInput, FieldErrorSlot, Loader, OtherErrors};
use crate::shared::submission::Phase;

#[component]
pub fn OnboardingForm(config: FormConfig) -> impl IntoView {
    let vm = OnboardingViewModel::new(&config);
    let state = vm.state;
    let inputs = AddressInputs::new();
    bind_autocomplete(inputs);

    let done = move || state.phase.get() == Phase::Submitted;
    // Any hand edit means the picked place no longer describes the address
    let forget_place = move |_: web_sys::Event| inputs.forget_place();

    view! {
        <form
            id=FORM_ID
            method="post"
            action=config.action_or(DEFAULT_ACTION)
            enctype="multipart/form-data"
            novalidate=true
            node_ref=state.form
            style:display=move || if done() { "none" } else { "block" }
            on:submit=on_submit(vm.controller.clone())
        >
            <CsrfInput token=config.csrf() />
            <input type="hidden" id=fields::PLACE_ID name=fields::PLACE_ID node_ref=inputs.place_id />

            <div class="form-row">
                <div class="form-group">
                    <label for=fields::FIRST_NAME>"First name"</label>
                    <input type="text" id=fields::FIRST_NAME name=fields::FIRST_NAME autocomplete="given-name" />
                </div>
                <div class="form-group">
                    <label for=fields::LAST_NAME>"Last name"</label>
                    <input type="text" id=fields::LAST_NAME name=fields::LAST_NAME autocomplete="family-name" />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for=fields::EMAIL>"Email *"</label>
                    <input type="email" id=fields::EMAIL name=fields::EMAIL autocomplete="email" />
                    <FieldErrorSlot state=state field=fields::EMAIL />
                </div>
                <div class="form-group">
                    <label for=fields::PHONE>"Phone"</label>
                    <input type="tel" id=fields::PHONE name=fields::PHONE autocomplete="tel" />
                </div>
            </div>

            <div class="form-group">
                <label for=fields::ADDRESS>"Street address *"</label>
                <input
                    type="text"
                    id=fields::ADDRESS
                    name=fields::ADDRESS
                    placeholder="Start typing your address"
                    node_ref=inputs.address
                    on:input=forget_place
                />
                <FieldErrorSlot state=state field=fields::ADDRESS />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for=fields::CITY>"City *"</label>
                    <input
                        type="text"
                        id=fields::CITY
                        name=fields::CITY
                        node_ref=inputs.city
                        on:input=forget_place
                    />
                    <FieldErrorSlot state=state field=fields::CITY />
                </div>
                <div class="form-group">
                    <label for=fields::ZIP>"Zip code *"</label>
                    <input
                        type="text"
                        id=fields::ZIP
                        name=fields::ZIP
                        inputmode="numeric"
                        maxlength="5"
                        value=FormConfig::prefill(&config.zipcode)
                        node_ref=inputs.zip
                        on:input=forget_place
                    />
                    <FieldErrorSlot state=state field=fields::ZIP />
                </div>
            </div>

            <div class="form-group">
                <label for=fields::NOTES>"What are you donating?"</label>
                <textarea id=fields::NOTES name=fields::NOTES rows="3"></textarea>
            </div>

            <Recaptcha widget=vm.captcha id=CAPTCHA_ID sitekey=config.recaptcha_sitekey.clone() />
            <FieldErrorSlot state=state field=CAPTCHA_ID />
            <OtherErrors state=state location=FORM_ID known=SLOTTED />

            <button type="submit" class="btn btn-primary" disabled=move || state.is_busy()>
                "Submit"
                <Loader state=state />
            </button>
        </form>

        <div id="success-wrapper" class="success-wrapper" style:display=move || if done() { "flex" } else { "none" }>
            <h3>"You're all set!"</h3>
            <p>{move || state.notice.get().unwrap_or_else(|| "We received your information and will be in touch soon.".to_string())}</p>
        </div>
    }
}
