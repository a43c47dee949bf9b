use wasm_bindgen::prelude::wasm_bindgen;

mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Global Clinic admin console");

    // Runtime config (./config.json) loads in the background; API calls await it.
    wasm_bindgen_futures::spawn_local(config::init());

    router::mount_app();
}
