//! # catalog-admin
//!
//! Leptos + WASM admin client for a product catalog REST backend.
//!
//! This crate contains the session core (token storage, JWT claim decoding,
//! the logged-in rule, route guarding, and bearer-token attachment) along
//! with the product and user management pages built on top of it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
