//! # client
//!
//! Leptos + WASM frontend for body-measurement estimation.
//!
//! The user picks three full-body photos (front, side, standing); the page
//! controller posts them to the remote pose-estimation service and renders the
//! returned measurements. The wire model lives in the `record` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use record::MEASURE_ENDPOINT;

/// WASM entry point: installs logging and hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
