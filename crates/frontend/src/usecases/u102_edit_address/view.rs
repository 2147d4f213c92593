use contracts::domain::a001_pickup_request::fields;
use leptos::prelude::*;

use super::view_model::{address_line, pickup_line, EditAddressViewModel, DEFAULT_ACTION, FORM_ID, SLOTTED};
use crate::shared::config::FormConfig;
use crate::shared::form_view::{on_submit, CsrfInput, FieldErrorSlot, Loader, OtherErrors};

#[component]
pub fn PickupSummary(config: FormConfig) -> impl IntoView {
    let line = pickup_line(config.pickup_date.as_deref(), config.pickup_time.as_deref());

    view! {
        <div class="pickup-summary">
            <h3>"Pickup"</h3>
            {match line {
                Some(line) => view! { <p class="pickup-date">{line}</p> }.into_any(),
                None => view! { <p class="pickup-date muted">"No pickup date chosen yet"</p> }.into_any(),
            }}
        </div>
    }
}

/// Read-only address with a pencil toggle; the form stays mounted while
/// hidden so its node ref remains valid.
#[component]
pub fn EditAddressForm(config: FormConfig) -> impl IntoView {
    let vm = EditAddressViewModel::new(&config);
    let state = vm.state;
    let current = address_line(&config);

    let (editing, set_editing) = signal(false);

    view! {
        <div class="address-panel">
            <div class="address-header">
                <h3>{move || if editing.get() { "Edit address" } else { "Address" }}</h3>
                <button
                    type="button"
                    class="btn-icon"
                    title="Edit address"
                    style:display=move || if editing.get() { "none" } else { "inline-block" }
                    on:click=move |_| set_editing.set(true)
                >
                    "✎"
                </button>
            </div>

            <p class="address-text" style:display=move || if editing.get() { "none" } else { "block" }>
                {current}
            </p>

            <form
                id=FORM_ID
                method="post"
                action=config.action_or(DEFAULT_ACTION)
                novalidate=true
                node_ref=state.form
                style:display=move || if editing.get() { "block" } else { "none" }
                on:submit=on_submit(vm.controller.clone())
            >
                <CsrfInput token=config.csrf() />
                <input type="hidden" name=fields::REQUEST_ID value=FormConfig::prefill(&config.request_id) />
                <input type="hidden" name=fields::PAGE value=FormConfig::prefill(&config.page) />

                <div class="form-group">
                    <label for="edit-address">"Street address"</label>
                    <input
                        type="text"
                        id="edit-address"
                        name=fields::ADDRESS
                        value=FormConfig::prefill(&config.address)
                    />
                    <FieldErrorSlot state=state field=fields::ADDRESS />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="edit-city">"City"</label>
                        <input type="text" id="edit-city" name=fields::CITY value=FormConfig::prefill(&config.city) />
                        <FieldErrorSlot state=state field=fields::CITY />
                    </div>
                    <div class="form-group">
                        <label for="edit-zipcode">"Zip code"</label>
                        <input
                            type="text"
                            id="edit-zipcode"
                            name=fields::ZIPCODE
                            inputmode="numeric"
                            maxlength="5"
                            value=FormConfig::prefill(&config.zipcode)
                        />
                        <FieldErrorSlot state=state field=fields::ZIPCODE />
                    </div>
                </div>
                <OtherErrors state=state location=FORM_ID known=SLOTTED />

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary" disabled=move || state.is_busy()>
                        "Update address"
                        <Loader state=state />
                    </button>
                    <button
                        type="button"
                        class="btn btn-link"
                        disabled=move || state.is_busy()
                        on:click=move |_| set_editing.set(false)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
