//! Library catalog - terminal menu

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_catalog::{
    cli::{self, Terminal},
    config::AppConfig,
    services::Services,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing. Logs go to stderr, the menu owns stdout.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_catalog={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }

    tracing::info!(
        return_policy = ?config.lending.return_policy,
        allow_duplicate_identifiers = config.catalog.allow_duplicate_identifiers,
        "Starting library catalog v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut services = Services::new(config);
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout().lock());
    cli::run(&mut services, &mut terminal)?;

    Ok(())
}
