//! # client
//!
//! Leptos UI for the Tavio dashboard: the public landing and sign-in pages,
//! the session-gated dashboard layout, and its collapsible navigation sidebar.
//!
//! Navigation behaviour is split into a static menu (`nav::menu`), a pure
//! state machine (`state::nav`), and a projection (`nav::view`) that the
//! `DashboardNav` component renders.

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
