//! Lively browser frontend.
//!
//! Reads the page config, routes `tracing` to the browser console and wires
//! the page's buttons and signup form to the core controller.

mod config;
mod dom;
mod wiring;

use tracing::Level;

fn main() {
    let loaded = config::load();
    let config = loaded.clone().unwrap_or_default();

    let level = lively_core::config::log_level(&config)
        .ok()
        .and_then(|name| name.parse::<Level>().ok())
        .unwrap_or(Level::INFO);
    if let Err(err) = dioxus_logger::init(level) {
        web_sys::console::error_1(&format!("failed to init logger: {err}").into());
    }

    if let Err(err) = loaded {
        tracing::warn!(%err, "using default page config");
    }

    if let Err(err) = wiring::start(config) {
        tracing::error!(?err, "failed to wire page");
    }
}
