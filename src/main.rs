//! Wedding RSVP Server
//!
//! Run with: cargo run --bin wedding-rsvp -- --config config.toml
//!
//! Without `--config`, configuration is read from the default locations
//! (see [`Config::load_default`]) with `WEDDING_*` environment overrides.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wedding_rsvp::api::{serve, AppState};
use wedding_rsvp::config::{Config, LoggingConfig};

#[derive(Parser)]
#[command(name = "wedding-rsvp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Wedding website with guest list management and RSVP forms")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    tracing::info!("Starting Wedding RSVP v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Public origin: {}", config.server.public_origin);
    tracing::info!(
        theme = ?config.dashboard.theme,
        seed_sample = config.guests.seed_sample,
        "Dashboard configured"
    );

    let state = AppState::from_config(&config);
    serve(state, &config.server).await?;

    tracing::info!("Wedding RSVP stopped");
    Ok(())
}

/// Initialize tracing from the logging config; `RUST_LOG` takes precedence
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "wedding_rsvp={},tower_http=debug",
            logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
