//! Development server for UI work without the hosted backend.
//!
//! Runs the in-process fake backend on a fixed port and seeds it with users,
//! spaces, reservations and reviews covering every payment page state.
//!
//! Usage: cargo run -p dev-server
//!
//! `DEV_SERVER_PORT` (default 54321) can be set in the environment or in a
//! `.env` file.

use anyhow::{Context, Result};
use test_helpers::mock::SeedData;
use test_helpers::telemetry;
use tracing::info;

const DEFAULT_PORT: u16 = 54321;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info");
    telemetry::init_subscriber(subscriber);

    let port = match std::env::var("DEV_SERVER_PORT") {
        Ok(port) => port.parse().context("DEV_SERVER_PORT must be a port")?,
        Err(_) => DEFAULT_PORT,
    };

    info!("🚀 Starting development backend");
    let app = test_helpers::spawn_app_on_port(port).await;

    let dataset = match SeedData::create(&app) {
        Ok(dataset) => dataset,
        Err(e) => {
            telemetry::log_error(e);
            anyhow::bail!("failed to seed development data");
        }
    };

    info!("🎯 Development backend ready!");
    info!("   API: {}", app.address());
    info!(
        "   UI:  cd ui && BACKEND_URL={} BACKEND_ANON_KEY={} trunk serve",
        app.address(),
        test_helpers::TEST_API_KEY
    );
    dataset.print_summary();
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development backend");
    Ok(())
}
