//! # client
//!
//! Leptos + WASM frontend for the Wordbook dictionary lookup.
//!
//! The crate is compiled twice: with `ssr` it renders the initial HTML inside
//! the axum host, with `hydrate` it becomes the browser bundle that owns the
//! search box and talks to the dictionary service directly.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install the panic hook and console logger, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
