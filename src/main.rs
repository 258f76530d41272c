//! Fileserver Web - Main Entry Point
//!
//! Validates the route table, installs logging and launches the Dioxus app.
//! The renderer comes from the `web` (browser) or `desktop` feature.

use fileserver_web::app::{app_routes, App};
use fileserver_web::shared::logging::init_logging;

fn main() {
    init_logging();

    // An ambiguous route table is a configuration error: refuse to start
    if let Err(err) = app_routes() {
        tracing::error!("Invalid route table: {}", err);
        return;
    }

    tracing::info!("Starting Fileserver Web...");
    dioxus::launch(App);
}
