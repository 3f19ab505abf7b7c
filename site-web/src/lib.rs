//! INTELIK site front end
//!
//! Leptos components for the marketing site. The footer is the mounted unit; the
//! [`app::App`] shell exists so the bundle can be previewed on its own.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod state;
pub mod utils;

use app::App;
use shared::footer::FOOTER;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("INTELIK site starting");

    // Content problems are an authoring bug; render anyway and shout in the console.
    if let Err(e) = FOOTER.validate() {
        log::error!("footer content is invalid: {}", e);
    }

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
    log::debug!("app mounted");
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::warn!("loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::error!("failed to add 'hidden' class: {:?}", e);
        }
    }

    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::error!("failed to hide loading screen: {:?}", e);
    }
}
