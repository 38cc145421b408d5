//! Widget Deck Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logging;
mod markdown;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load_config();
    logging::init(&config);
    let _ = rolling_logger::info(&format!("starting {}", config.app_name));
    if let Some(e) = config_error {
        let _ = rolling_logger::error(&format!("{}; using default config", e));
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
