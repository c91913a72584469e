pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("starting Ledgerly frontend");

    // window.__LEDGERLY_ENV wins over ./config.json when present.
    leptos::spawn_local(async move {
        config::init().await;
    });

    router::mount_app();
}
