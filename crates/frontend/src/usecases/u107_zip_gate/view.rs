use contracts::domain::a001_pickup_request::fields;
use leptos::prelude::*;

use super::view_model::{ZipGateViewModel, DEFAULT_ACTION, FORM_ID, SLOTTED};
use crate::shared::config::FormConfig;
use crate::shared::form_view::{on_submit, FieldErrorSlot, Loader, OtherErrors};

#[component]
pub fn ZipGateForm(config: FormConfig) -> impl IntoView {
    let vm = ZipGateViewModel::new(&config);
    let state = vm.state;

    view! {
        <form
            id=FORM_ID
            method="get"
            action=config.action_or(DEFAULT_ACTION)
            novalidate=true
            node_ref=state.form
            on:submit=on_submit(vm.controller.clone())
        >
            <div class="zip-entry">
                <input
                    type="text"
                    id=fields::ZIPCODE
                    name=fields::ZIPCODE
                    placeholder="Enter your ZIP code"
                    inputmode="numeric"
                    maxlength="5"
                    autocomplete="postal-code"
                    value=FormConfig::prefill(&config.zipcode)
                />
                <button type="submit" class="btn btn-primary" disabled=move || state.is_busy()>
                    "Check availability"
                    <Loader state=state />
                </button>
            </div>
            <FieldErrorSlot state=state field=fields::ZIPCODE />
            <OtherErrors state=state location=FORM_ID known=SLOTTED />
        </form>
    }
}
