//! Free-mint giveaway front end.
//!
//! Landing page with wallet connect, claim form, simulated live counter and
//! claim toasts, plus an operator dashboard at `/admin`.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Free mint page starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder from `index.html`.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, skipping loading screen");
        return;
    };

    let Some(loading) = document.get_element_by_id("leptos-loading") else {
        log::debug!("Loading element not found");
        return;
    };

    if let Some(element) = loading.dyn_ref::<HtmlElement>() {
        if let Err(e) = element.class_list().add_1("hidden") {
            log::warn!("Failed to hide loading screen: {:?}", e);
        }
    }
}
