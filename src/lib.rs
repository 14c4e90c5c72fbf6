//! # gardenhub
//!
//! Leptos + WASM client for the GardenHub gardening-tips community: account
//! sign-up and login, a session store fed by the identity provider, guarded
//! routes, and the tip and gardener pages backed by the tips REST API.
//!
//! The same crate is compiled twice: with `hydrate` into the browser bundle,
//! and with `ssr` as a library the `server` crate renders from.

pub mod app;
pub mod components;
pub mod config;
pub mod identity;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    log::info!("gardenhub: hydrating");
    leptos::mount::hydrate_body(app::App);
}
