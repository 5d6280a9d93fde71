//! Mímir Software Factory site
//!
//! Marketing site for a data science and machine learning consultancy,
//! built with Leptos and WebAssembly. `core` holds the animation and
//! contact-form state machines; `ui` drives them from browser timers,
//! intersection observers and the form-relay transports.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
