//! List Creation Frontend Entry Point

mod models;
mod config;
mod error;
mod api;
mod loader;
mod board;
mod store;
mod context;
mod logging;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    tracing::info!(api_url = %config.api_url, "starting list creation");

    mount_to_body(move || view! { <App config=config /> });
}
