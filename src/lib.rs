//! Client for the Team BlackCat club site.
//!
//! SYSTEM CONTEXT
//! ==============
//! A client-side rendered WebAssembly app. The session manager mirrors the
//! identity provider's state into a shared signal; route gates and pages
//! read from it. All provider traffic is plain HTTPS via `net`.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Mount the application to the document body. Call once from `main`.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
