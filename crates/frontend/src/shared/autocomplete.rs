//! Google Places address autocomplete
//!
//! Optional: when the Places library is not on the page the address field
//! stays a plain text input and the place id stays empty.

use leptos::html;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::shared::form_view::set_input_value;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"], js_name = Autocomplete)]
    #[derive(Clone)]
    type PlacesAutocomplete;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"], js_class = "Autocomplete", catch)]
    fn new(input: &web_sys::HtmlInputElement, options: &JsValue) -> Result<PlacesAutocomplete, JsValue>;

    #[wasm_bindgen(method, js_name = getPlace)]
    fn get_place(this: &PlacesAutocomplete) -> JsValue;

    #[wasm_bindgen(method, js_name = addListener)]
    fn add_listener(this: &PlacesAutocomplete, event: &str, handler: &js_sys::Function) -> JsValue;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub address_components: Option<Vec<AddressComponent>>,
    #[serde(default)]
    pub place_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Values to write back into the form after a place is picked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFill {
    pub address: String,
    pub city: String,
    pub zip: String,
    pub place_id: String,
}

enum Target {
    Street,
    City,
    Zip,
}

fn target_of(component_type: &str) -> Option<Target> {
    match component_type {
        "street_number" | "route" => Some(Target::Street),
        "locality" | "postal_town" | "sublocality_level_1" | "administrative_area_level_3" => {
            Some(Target::City)
        }
        "postal_code" => Some(Target::Zip),
        _ => None,
    }
}

impl AddressFill {
    /// `None` when the place carries no components (user pressed enter on
    /// free text); the form is then left as typed.
    pub fn from_place(place: &Place) -> Option<Self> {
        let components = place.address_components.as_ref()?;
        let mut fill = AddressFill {
            place_id: place.place_id.clone().unwrap_or_default(),
            ..Default::default()
        };

        for component in components {
            for kind in &component.types {
                match target_of(kind) {
                    Some(Target::Street) => {
                        if !fill.address.is_empty() {
                            fill.address.push(' ');
                        }
                        fill.address.push_str(&component.long_name);
                    }
                    Some(Target::City) => fill.city = component.long_name.clone(),
                    Some(Target::Zip) => fill.zip = component.long_name.clone(),
                    None => {}
                }
            }
        }
        Some(fill)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AutocompleteOptions {
    component_restrictions: CountryRestriction,
    types: [&'static str; 1],
    fields: [&'static str; 3],
}

#[derive(Serialize)]
struct CountryRestriction {
    country: &'static str,
}

/// Inputs the widget writes into
#[derive(Clone, Copy)]
pub struct AddressInputs {
    pub address: NodeRef<html::Input>,
    pub city: NodeRef<html::Input>,
    pub zip: NodeRef<html::Input>,
    pub place_id: NodeRef<html::Input>,
}

impl AddressInputs {
    pub fn new() -> Self {
        Self {
            address: NodeRef::new(),
            city: NodeRef::new(),
            zip: NodeRef::new(),
            place_id: NodeRef::new(),
        }
    }

    pub fn apply(&self, fill: &AddressFill) {
        set_input_value(&self.address, &fill.address);
        set_input_value(&self.city, &fill.city);
        set_input_value(&self.zip, &fill.zip);
        set_input_value(&self.place_id, &fill.place_id);
    }

    /// A hand edit invalidates the picked place
    pub fn forget_place(&self) {
        set_input_value(&self.place_id, "");
    }
}

impl Default for AddressInputs {
    fn default() -> Self {
        Self::new()
    }
}

fn places_loaded() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    ["google", "maps", "places", "Autocomplete"]
        .iter()
        .try_fold(JsValue::from(window), |obj, key| {
            js_sys::Reflect::get(&obj, &JsValue::from_str(key))
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
        })
        .is_some()
}

/// Attach the widget to `inputs.address` once it is mounted
pub fn bind_autocomplete(inputs: AddressInputs) {
    Effect::new(move |_| {
        let Some(address) = inputs.address.get() else {
            return;
        };
        if !places_loaded() {
            log::info!("Places library not loaded, autocomplete disabled");
            return;
        }

        let options = AutocompleteOptions {
            component_restrictions: CountryRestriction { country: "us" },
            types: ["address"],
            fields: ["address_components", "name", "place_id"],
        };
        let options = match serde_wasm_bindgen::to_value(&options) {
            Ok(options) => options,
            Err(e) => {
                log::error!("autocomplete options: {}", e);
                return;
            }
        };
        let widget = match PlacesAutocomplete::new(&address, &options) {
            Ok(widget) => widget,
            Err(e) => {
                log::warn!("autocomplete unavailable: {:?}", e);
                return;
            }
        };

        let source = widget.clone();
        let on_place = Closure::<dyn FnMut()>::new(move || {
            match serde_wasm_bindgen::from_value::<Place>(source.get_place()) {
                Ok(place) => {
                    if let Some(fill) = AddressFill::from_place(&place) {
                        inputs.apply(&fill);
                    }
                }
                Err(e) => log::warn!("unexpected place shape: {}", e),
            }
        });
        widget.add_listener("place_changed", on_place.as_ref().unchecked_ref());
        // The widget lives as long as the page.
        on_place.forget();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_fill_from_place() {
        let place = Place {
            address_components: Some(vec![
                component("4000", &["street_number"]),
                component("Hopyard Road", &["route"]),
                component("Pleasanton", &["locality", "political"]),
                component("Alameda County", &["administrative_area_level_2", "political"]),
                component("94588", &["postal_code"]),
            ]),
            place_id: Some("ChIJabc".to_string()),
        };
        assert_eq!(
            AddressFill::from_place(&place),
            Some(AddressFill {
                address: "4000 Hopyard Road".to_string(),
                city: "Pleasanton".to_string(),
                zip: "94588".to_string(),
                place_id: "ChIJabc".to_string(),
            })
        );
    }

    #[test]
    fn test_sublocality_counts_as_city() {
        let place = Place {
            address_components: Some(vec![
                component("Brooklyn", &["sublocality_level_1", "sublocality"]),
                component("11201", &["postal_code"]),
            ]),
            place_id: None,
        };
        let fill = AddressFill::from_place(&place).unwrap();
        assert_eq!(fill.city, "Brooklyn");
        assert_eq!(fill.address, "");
        assert_eq!(fill.place_id, "");
    }

    #[test]
    fn test_place_without_components() {
        let place: Place = serde_json::from_str(r#"{"name": "1 Market"}"#).unwrap();
        assert_eq!(AddressFill::from_place(&place), None);
    }
}
