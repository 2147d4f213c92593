use contracts::domain::a001_pickup_request::{fields, GateOption, GATED_VALUE};
use leptos::prelude::*;

use super::view_model::{
    notice_value, RequestPickupViewModel, CAPTCHA_ID, DEFAULT_ACTION, FORM_ID, SLOTTED,
};
use crate::shared::captcha::Recaptcha;
use crate::shared::config::FormConfig;
use crate::shared::form_view::{on_submit, CsrfInput, FieldErrorSlot, Loader, OtherErrors};

fn shown(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn RequestPickupForm(config: FormConfig) -> impl IntoView {
    let vm = RequestPickupViewModel::new(&config);
    let state = vm.state;

    let (gated, set_gated) = signal(false);
    let (gate_option, set_gate_option) = signal(String::new());

    view! {
        <form
            id=FORM_ID
            method="post"
            action=config.action_or(DEFAULT_ACTION)
            enctype="multipart/form-data"
            novalidate=true
            node_ref=state.form
            on:submit=on_submit(vm.controller.clone())
        >
            <CsrfInput token=config.csrf() />

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
                    autocomplete="street-address"
                    value=FormConfig::prefill(&config.address)
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
                        autocomplete="address-level2"
                        value=FormConfig::prefill(&config.city)
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
                        autocomplete="postal-code"
                        value=FormConfig::prefill(&config.zipcode)
                    />
                    <FieldErrorSlot state=state field=fields::ZIP />
                </div>
            </div>

            <div class="form-group">
                <label for=fields::NOTES>"Pickup notes"</label>
                <textarea id=fields::NOTES name=fields::NOTES rows="3"></textarea>
            </div>

            <label class="checkbox">
                <input
                    type="checkbox"
                    id=fields::GATED
                    name=fields::GATED
                    value=GATED_VALUE
                    on:change=move |ev| set_gated.set(event_target_checked(&ev))
                />
                " I live in a gated community"
            </label>

            <div class="gated-options" style:display=move || shown(gated.get())>
                <label for=fields::GATED_OPTION>"How can our driver get in?"</label>
                <select
                    id=fields::GATED_OPTION
                    name=fields::GATED_OPTION
                    on:change=move |ev| set_gate_option.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an option --"</option>
                    {GateOption::ALL
                        .into_iter()
                        .map(|option| view! { <option value=option.value()>{option.label()}</option> })
                        .collect_view()}
                </select>
                <FieldErrorSlot state=state field=fields::GATED_OPTION />

                <div style:display=move || shown(gate_option.get() == GateOption::Code.value())>
                    <label for=fields::GATE_CODE>"Gate code"</label>
                    <input type="text" id=fields::GATE_CODE name=fields::GATE_CODE />
                    <FieldErrorSlot state=state field=fields::GATE_CODE />
                </div>
                <div style:display=move || shown(gate_option.get() == GateOption::Qr.value())>
                    <label for="qrCodeInput">"Upload the QR code"</label>
                    <input type="file" id="qrCodeInput" name="qrCodeInput" accept="image/*" />
                </div>
                <input
                    type="hidden"
                    name=fields::NOTICE
                    prop:value=move || gate_option.with(|option| notice_value(option))
                />
            </div>

            <Recaptcha widget=vm.captcha id=CAPTCHA_ID sitekey=config.recaptcha_sitekey.clone() />
            <FieldErrorSlot state=state field=CAPTCHA_ID />
            <OtherErrors state=state location=FORM_ID known=SLOTTED />

            <button type="submit" class="btn btn-primary" disabled=move || state.is_busy()>
                "Request pickup"
                <Loader state=state />
            </button>
        </form>
    }
}
