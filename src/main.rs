//! Meals Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod models;
mod refresher;
mod store;
mod table;

use app::App;
use config::MealsConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let logger = console_logger::init(LevelFilter::Info).ok();
    let config = MealsConfig::from_document();
    if let Some(logger) = logger {
        logger.set_max_level(config.log_level);
    }
    log::info!("[App] Meals page starting, resource path {}", config.resource_path);

    mount_to_body(move || view! { <App config=config logger=logger /> });
}
