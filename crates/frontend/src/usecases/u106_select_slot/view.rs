use contracts::domain::a001_pickup_request::fields;
use leptos::prelude::*;

use super::view_model::{
    CancelEditViewModel, SelectSlotViewModel, SlotSelection, CANCEL_FORM_ID, DEFAULT_ACTION, FORM_ID,
};
use crate::shared::config::FormConfig;
use crate::shared::form_view::{on_submit, CsrfInput, FieldErrorSlot, Loader, OtherErrors};

const SLOTTED: &[&str] = &[fields::CHOSEN_DATE];

#[component]
pub fn SelectSlotForm(config: FormConfig) -> impl IntoView {
    let vm = SelectSlotViewModel::new();
    let state = vm.state;
    let days = config.day_options();
    let selection = RwSignal::new(SlotSelection::default());

    if days.is_empty() {
        log::warn!("#{}: no pickup days offered", FORM_ID);
    }

    let tiles = days
        .into_iter()
        .map(|day| {
            let date = day.date.clone();
            let label = day.display_label().to_string();
            let available = day.available;
            view! {
                <button
                    type="button"
                    class="time-slot"
                    class:active=move || selection.with(|s| s.is_chosen(&date))
                    class:unavailable=!available
                    disabled=!available
                    on:click=move |_| selection.update(|s| s.toggle(&day))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    // Only the edit-date page offers a way back
    let cancel = config
        .cancel_url()
        .map(|url| view! { <CancelEditDate url=url config=config.clone() /> });

    view! {
        <form
            id=FORM_ID
            method="post"
            action=config.action_or(DEFAULT_ACTION)
            node_ref=state.form
            on:submit=on_submit(vm.controller.clone())
        >
            <CsrfInput token=config.csrf() />
            <input type="hidden" name=fields::REQUEST_ID value=FormConfig::prefill(&config.request_id) />
            <input type="hidden" name=fields::PAGE value=FormConfig::prefill(&config.page) />
            <input
                type="hidden"
                id=fields::CHOSEN_DATE
                name=fields::CHOSEN_DATE
                prop:value=move || selection.with(|s| s.chosen_date())
            />
            <input
                type="hidden"
                id=fields::CHOSEN_TIME
                name=fields::CHOSEN_TIME
                prop:value=move || selection.with(|s| s.chosen_time())
            />

            <div id="date-selection-scroll" class="date-selection-scroll">
                <div id="date-selection-wrapper" class="date-selection-wrapper">{tiles}</div>
            </div>
            <FieldErrorSlot state=state field=fields::CHOSEN_DATE />
            <OtherErrors state=state location=FORM_ID known=SLOTTED />

            <p class="selection-info">{move || selection.with(|s| s.info()).unwrap_or_default()}</p>

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || !selection.with(|s| s.has_choice()) || state.is_busy()
            >
                "Confirm date"
                <Loader state=state />
            </button>
        </form>
        {cancel}
    }
}

#[component]
fn CancelEditDate(url: String, config: FormConfig) -> impl IntoView {
    let vm = CancelEditViewModel::new();
    let state = vm.state;

    view! {
        <form
            id=CANCEL_FORM_ID
            method="post"
            action=url
            node_ref=state.form
            on:submit=on_submit(vm.controller.clone())
        >
            <CsrfInput token=config.csrf() />
            <input type="hidden" name=fields::REQUEST_ID value=FormConfig::prefill(&config.request_id) />
            <OtherErrors state=state location=CANCEL_FORM_ID known=&[] />
            <button type="submit" id="cancel-edit-date" class="btn btn-link" disabled=move || state.is_busy()>
                "Keep my current date"
            </button>
        </form>
    }
}
