use std::{
    env, fs,
    io::ErrorKind,
    ops::Deref,
    sync::{Arc, Mutex, MutexGuard},
};

use chrono::{NaiveDate, Utc};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::{
    error::Error,
    provider::DatabasePool,
    series::{PriceDataState, SeriesConfig},
};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub database: DatabasePool,
    pub prices: Mutex<PriceDataState>,
}

impl State {
    pub fn new(config: Config, database: DatabasePool) -> State {
        let prices = PriceDataState::new(
            config.coin.series.clone(),
            Utc::now(),
            StdRng::from_entropy(),
        );

        info!(
            "Generated {} {} price samples since {}",
            prices.all().len(),
            config.coin.ticker,
            config.coin.series.start_date
        );

        Self {
            config,
            database,
            prices: Mutex::new(prices),
        }
    }

    pub fn prices(&self) -> Result<MutexGuard<'_, PriceDataState>, Error> {
        self.prices
            .lock()
            .map_err(|e| Error::ServerError(format!("price state: {}", e)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinConfig {
    pub coin_name: String,
    pub ticker: String,
    pub holdings: f64,
    pub series: SeriesConfig,
}

impl CoinConfig {
    pub fn holdings_value(&self) -> f64 {
        self.holdings * self.series.current_price
    }

    pub fn validate(&self, today: NaiveDate) -> Result<(), Error> {
        let prices = [
            ("STARTING_PRICE", self.series.starting_price),
            ("CURRENT_PRICE", self.series.current_price),
        ];

        for (key, value) in prices {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::ConfigurationError(format!(
                    "{} must be a positive number, got {}",
                    key, value
                )));
            }
        }

        if !self.holdings.is_finite() || self.holdings < 0.0 {
            return Err(Error::ConfigurationError(format!(
                "HOLDINGS must not be negative, got {}",
                self.holdings
            )));
        }

        if self.series.start_date > today {
            return Err(Error::ConfigurationError(format!(
                "START_DATE {} is in the future",
                self.series.start_date
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub static_dir: String,
    pub admin_password: String,
    pub coin: CoinConfig,
}

pub fn get_configuration() -> Result<Config, Error> {
    let database_url = env::var("DATABASE_URL")?;
    let max_connections = env::var("MAX_CONNECTIONS")?.parse()?;
    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;
    let allowed_origins = env::var("ALLOWED_ORIGINS")?
        .split(',')
        .map(|item| item.trim().to_owned())
        .collect::<Vec<String>>();
    let static_dir = format!(
        "{}/{}",
        env!("CARGO_MANIFEST_DIR"),
        env::var("STATIC_DIRECTORY")?
    );
    let admin_password = env::var("ADMIN_PASSWORD")?;

    if admin_password.is_empty() {
        return Err(Error::ConfigurationError(String::from(
            "ADMIN_PASSWORD must not be empty",
        )));
    }

    let coin = get_coin_configuration()?;

    let config = Config {
        database_url,
        max_connections,
        server_host,
        port,
        allowed_origins,
        static_dir,
        admin_password,
        coin,
    };

    Ok(config)
}

/// Coin parameters only; enough to run the series generator without a
/// database.
pub fn get_coin_configuration() -> Result<CoinConfig, Error> {
    let coin_name = env::var("COIN_NAME")?;
    let ticker = env::var("TICKER")?;
    let starting_price = env::var("STARTING_PRICE")?.parse()?;
    let current_price = env::var("CURRENT_PRICE")?.parse()?;
    let holdings = env::var("HOLDINGS")?.parse()?;
    let start_date =
        NaiveDate::parse_from_str(&env::var("START_DATE")?, "%Y-%m-%d")?;

    let coin = CoinConfig {
        coin_name,
        ticker,
        holdings,
        series: SeriesConfig {
            start_date,
            starting_price,
            current_price,
        },
    };

    coin.validate(Utc::now().date_naive())?;

    Ok(coin)
}

pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";
    let coin_config_file: &str = "coin.conf";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);
    let coin_config_path = format!("{}/{}", directory, coin_config_file);

    match fs::read_to_string(path) {
        Ok(config_string) => parse_config_string(config_string),
        // variables may already be exported by the environment
        Err(e) if e.kind() == ErrorKind::NotFound => {},
        Err(e) => return Err(e.into()),
    }

    let coin_config_string = fs::read_to_string(coin_config_path)?;
    parse_config_string(coin_config_string);

    Ok(())
}

fn parse_config_string(config: String) {
    let params: Vec<Option<(&str, &str)>> = config
        .lines()
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with('#'))
        .map(|s| s.split_once('='))
        .collect();

    for (key, value) in params.into_iter().flatten() {
        let key = key.trim();
        if env::var_os(key).is_none() {
            env::set_var(key, value.trim());
        }
    }
}
