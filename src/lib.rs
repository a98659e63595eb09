//! # helpy-client
//!
//! Leptos + WASM frontend for the Helpy helpdesk ticketing tool.
//!
//! The crate is a single-page application talking to an external REST
//! backend: it authenticates a user, shows ticket statistics, lists
//! tickets, and issues create/close/delete actions. There is no backend
//! code here; `net::api` is the only place requests originate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrates the server-rendered shell into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
