use clap::Parser;
use tracing::{error, Level};

use coinboard::{
    cli::{init_config, run_migrate, run_series, Cli, Commands},
    configuration::{AppState, Config, State},
    error::Error,
    migration,
    provider::DatabasePool,
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level({
            #[cfg(debug_assertions)]
            {
                Level::DEBUG
            }

            #[cfg(not(debug_assertions))]
            {
                Level::INFO
            }
        })
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Serve) => run_server().await,
        Some(Commands::Migrate { fake }) => run_migrate(fake).await,
        Some(Commands::Series { period, seed }) => run_series(&period, seed),
    }
}

async fn run_server() -> Result<(), Error> {
    let (config, database) = match init().await {
        Ok((config, database)) => (config, database),
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let state = State::new(config, database);
    let app_state = AppState::new(state);

    server::server_task(&app_state).await
}

async fn init() -> Result<(Config, DatabasePool), Error> {
    let config = init_config()?;

    migration::run_migrations(&config.database_url).await?;

    let database = DatabasePool::new(&config).await?;
    Ok((config, database))
}
