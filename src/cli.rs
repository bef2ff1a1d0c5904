//! CLI module for the coinboard service
//!
//! Runs the HTTP server by default, plus maintenance commands for
//! migrations and for inspecting the synthetic series without a database.

use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    configuration::{
        get_coin_configuration, get_configuration, set_configuration, Config,
    },
    error::Error,
    migration,
    series::{PeriodSelector, PriceDataState, PriceView, SeriesConfig},
};

/// Synthetic coin price board
#[derive(Parser)]
#[command(name = "coinboard")]
#[command(about = "Synthetic coin price chart with an admin backend", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default if no command specified)
    Serve,

    /// Run database migrations
    Migrate {
        /// Mark migrations as applied without running them (for existing databases).
        /// Use alone to fake all migrations, or with a version number to fake up to that version.
        #[arg(long)]
        fake: Option<Option<u32>>,
    },

    /// Print a generated price series as JSON
    Series {
        /// One of LIVE, 1D, 1W, 1M, ALL
        #[arg(long, default_value = "ALL")]
        period: String,

        /// Seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Initialize configuration and return Config
pub fn init_config() -> Result<Config, Error> {
    set_configuration()?;
    get_configuration()
}

pub async fn run_migrate(fake: Option<Option<u32>>) -> Result<(), Error> {
    let config = init_config()?;

    match fake {
        // --fake (no version) - fake all migrations
        Some(None) => {
            tracing::info!(
                "Marking all migrations as applied without running them..."
            );
            migration::run_migrations_fake(&config.database_url, None).await?;
        },
        // --fake <version> - fake up to version, then run remaining
        Some(Some(version)) => {
            tracing::info!(
                "Marking migrations up to V{:03} as applied...",
                version
            );
            migration::run_migrations_fake(
                &config.database_url,
                Some(version),
            )
            .await?;
            migration::run_migrations(&config.database_url).await?;
        },
        None => {
            migration::run_migrations(&config.database_url).await?;
        },
    }

    tracing::info!("Migrations complete");

    Ok(())
}

pub fn run_series(period: &str, seed: Option<u64>) -> Result<(), Error> {
    set_configuration()?;
    let coin = get_coin_configuration()?;

    let view = build_series(coin.series, PeriodSelector::from(period), seed);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

fn build_series(
    config: SeriesConfig,
    period: PeriodSelector,
    seed: Option<u64>,
) -> PriceView {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let now = Utc::now();

    let mut state = PriceDataState::new(config, now, rng);
    state.select(period, now);
    state.snapshot()
}
