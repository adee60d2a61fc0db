//! Mindi Dashboard
//!
//! Wellbeing dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Mood logging with intensity and notes
//! - Journal with AI responses
//! - On-demand AI insights
//! - Mood trend chart and per-mood statistics
//!
//! # Architecture
//!
//! Client-side rendered Leptos application. All decisions live in the
//! `mindi` controller; this crate turns DOM events into messages and
//! carries out the effects the controller returns.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = config::load();
    logging::init(&config.logging.level);
    tracing::info!(api = %config.api.base_url, "Mindi dashboard starting");

    mount_to_body(move || view! { <app::App config=config /> });
}
