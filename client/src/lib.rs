//! # client
//!
//! Leptos frontend for the chat application: route-level auth redirection,
//! the per-session current-user slot, and the wire shapes shared with the
//! external chat API.
//!
//! The crate is compiled twice: with `ssr` into the host server for
//! server-side rendering, and with `hydrate` into WASM for the browser.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the app over the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let config = config::RuntimeConfig::from_document();
    leptos::mount::hydrate_body(move || leptos::view! { <App config=config.clone()/> });
}
