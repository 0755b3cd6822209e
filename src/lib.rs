//! # coursemart-ui
//!
//! Leptos + WASM frontend for the Coursemart online course marketplace.
//!
//! This crate contains pages, components, application state, and the
//! HTTP API layer. The admin category screens share one generic
//! orderable-list controller (`state::orderable` + the
//! `components::orderable_admin` screen) for optimistic drag-and-drop
//! reordering with server-sync rollback.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
