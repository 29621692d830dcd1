//! Personal portfolio site: client-side navigation, dismissible overlays,
//! idle route prefetching and a one-shot visit beacon.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Installs the panic hook and logger, then mounts [`app::App`] on `#app`.
pub fn mount() {
    console_error_panic_hook::set_once();
    utils::logger::init(config::LOG_LEVEL);

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, app::App).forget();
}
