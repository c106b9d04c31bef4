//! News Hub Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod debounce;
mod error;
mod favorites;
mod logger;
mod models;
mod pagination;
mod query;
mod reader;
mod settings;
mod share;
mod store;
mod sync;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
