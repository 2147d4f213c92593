use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::config::FormConfig;
use crate::usecases::u101_request_pickup::RequestPickupForm;
use crate::usecases::u102_edit_address::{EditAddressForm, PickupSummary};
use crate::usecases::u103_contact::ContactForm;
use crate::usecases::u104_onboarding::OnboardingForm;
use crate::usecases::u105_cancel_request::CancelRequestForm;
use crate::usecases::u106_select_slot::SelectSlotForm;
use crate::usecases::u107_zip_gate::ZipGateForm;

/// Mount point id -> component. A page carries only the roots it needs.
const ROOTS: &[(&str, fn(web_sys::HtmlElement, FormConfig))] = &[
    ("init-form-root", |el, config| {
        mount(el, move || view! { <RequestPickupForm config=config /> })
    }),
    ("pickup-summary-root", |el, config| {
        mount(el, move || view! { <PickupSummary config=config /> })
    }),
    ("edit-address-root", |el, config| {
        mount(el, move || view! { <EditAddressForm config=config /> })
    }),
    ("contact-form-root", |el, config| {
        mount(el, move || view! { <ContactForm config=config /> })
    }),
    ("mopf-form-root", |el, config| {
        mount(el, move || view! { <OnboardingForm config=config /> })
    }),
    ("cancel-request-root", |el, config| {
        mount(el, move || view! { <CancelRequestForm config=config /> })
    }),
    ("date-form-root", |el, config| {
        mount(el, move || view! { <SelectSlotForm config=config /> })
    }),
    ("zip-gate-root", |el, config| {
        mount(el, move || view! { <ZipGateForm config=config /> })
    }),
];

fn mount<F, N>(el: web_sys::HtmlElement, f: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    // Mounted for the lifetime of the page.
    leptos::mount::mount_to(el, f).forget();
}

/// Mount every form whose root element is on the current page
pub fn mount_forms() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document, nothing mounted");
        return;
    };

    let mut mounted = 0;
    for (id, mount_root) in ROOTS {
        let Some(element) = document.get_element_by_id(id) else {
            continue;
        };
        let config = FormConfig::from_element(&element);
        match element.dyn_into::<web_sys::HtmlElement>() {
            Ok(el) => {
                mount_root(el, config);
                mounted += 1;
            }
            Err(_) => log::warn!("#{} is not an HTML element", id),
        }
    }
    log::debug!("mounted {} form(s)", mounted);
}
