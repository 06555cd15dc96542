//! # connekta-login
//!
//! Leptos + WASM login front end for the Connekta application.
//!
//! This crate contains the login form state, the submission handler that
//! talks to the backend authentication endpoint, session bootstrap into
//! browser storage, and the pages that render it. Everything outside the
//! `browser` feature is plain Rust so the flow is testable natively and
//! reusable by the `connekta-cli` crate.
//!
//! BUILDS
//! ======
//! - `csr`: standalone WASM bundle; `mount()` renders `App` into `<body>`.
//!   Serve it with any static host (e.g. `trunk serve --features csr`).
//! - `hydrate` + `ssr`: the server renders `app::shell` and the browser
//!   calls `hydrate()` to attach to that markup.

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "browser")]
fn install_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// WASM entry point for SSR builds: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    install_browser_logging();
    leptos::mount::hydrate_body(app::App);
}

/// WASM entry point for client-side-rendered builds.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    install_browser_logging();
    leptos::mount::mount_to_body(app::App);
}
