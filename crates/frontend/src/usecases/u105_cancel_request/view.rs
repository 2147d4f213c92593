use contracts::domain::a001_pickup_request::fields;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::{
    CancelRequestViewModel, AFTER_CANCEL_URL, DEFAULT_ACTION, FORM_ID, REDIRECT_DELAY_MS,
};
use crate::shared::config::FormConfig;
use crate::shared::form_view::{navigate, on_submit, CsrfInput, Loader, OtherErrors};
use crate::shared::submission::Phase;

#[component]
pub fn CancelRequestForm(config: FormConfig) -> impl IntoView {
    let vm = CancelRequestViewModel::new(&config);
    let state = vm.state;
    let (confirming, set_confirming) = signal(false);
    let toggle = move |_: leptos::ev::MouseEvent| set_confirming.update(|open| *open = !*open);

    // Leave the page once the server confirms
    Effect::new(move |_| {
        if state.phase.get() == Phase::Submitted {
            spawn_local(async {
                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                navigate(AFTER_CANCEL_URL);
            });
        }
    });

    view! {
        <div class="cancel-request">
            <button
                type="button"
                id="cancel-request-init"
                class="btn btn-danger-outline"
                class:active=move || confirming.get()
                on:click=toggle
            >
                "Cancel pickup"
            </button>

            <div id="cancel-confirm-wrapper" style:display=move || if confirming.get() { "flex" } else { "none" }>
                <form
                    id=FORM_ID
                    method="post"
                    action=config.action_or(DEFAULT_ACTION)
                    node_ref=state.form
                    on:submit=on_submit(vm.controller.clone())
                >
                    <CsrfInput token=config.csrf() />
                    <input type="hidden" name=fields::REQUEST_ID value=FormConfig::prefill(&config.request_id) />
                    <p>"Are you sure you want to cancel this pickup?"</p>
                    <OtherErrors state=state location=FORM_ID known=&[] />
                    {move || state.notice.get().map(|notice| view! {
                        <div class="user-notice-ok">{notice}</div>
                    })}
                    <div class="form-actions">
                        <button
                            type="submit"
                            class="btn btn-danger"
                            disabled=move || state.is_busy() || state.phase.get().is_terminal()
                        >
                            "Yes, cancel it"
                            <Loader state=state />
                        </button>
                        <button type="button" id="cancel-back-btn" class="btn btn-link" on:click=toggle>
                            "Go back"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
