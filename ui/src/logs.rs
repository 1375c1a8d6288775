//! Logging to the browser console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber. Safe to call more than once; only the
/// first call takes effect.
pub fn init_logging() {
    let env_filter = EnvFilter::new("error,ui=debug");

    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // no clock in the browser
        .with_line_number(true)
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("console logging ready");
    }
}
