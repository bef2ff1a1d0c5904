//! Miscellaneous API endpoints
//!
//! Coin configuration, recorded prices, wallet, session and version.

use actix_web::{get, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::is_authenticated,
    types::{PriceRecord, WalletRecord},
};

// =============================================================================
// Coin configuration
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CoinResponse {
    pub coin_name: String,
    pub ticker: String,
    pub holdings: f64,
    pub starting_price: f64,
    pub current_price: f64,
    pub holdings_value: f64,
    pub start_date: String,
}

#[get("/config")]
pub async fn coin_config(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let coin = &state.config.coin;

    Ok(web::Json(CoinResponse {
        coin_name: coin.coin_name.to_owned(),
        ticker: coin.ticker.to_owned(),
        holdings: coin.holdings,
        starting_price: coin.series.starting_price,
        current_price: coin.series.current_price,
        holdings_value: coin.holdings_value(),
        start_date: coin.series.start_date.to_string(),
    }))
}

// =============================================================================
// Recorded prices
// =============================================================================

#[get("/prices")]
pub async fn prices(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let data = state.database.price_history.get_all().await?;
    let prices = data
        .into_iter()
        .map(PriceRecord::try_from)
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(web::Json(prices))
}

// =============================================================================
// Wallet
// =============================================================================

#[get("/wallet")]
pub async fn wallet(
    state: web::Data<AppState<State>>,
) -> Result<impl Responder, Error> {
    let wallet = state.database.wallet.get().await?;

    Ok(web::Json(WalletRecord::try_from(wallet)?))
}

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
}

#[get("/session")]
pub async fn session(req: HttpRequest) -> Result<impl Responder, Error> {
    Ok(web::Json(SessionResponse {
        authenticated: is_authenticated(&req),
    }))
}

// =============================================================================
// Version
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResponse<'a> {
    pub version: Option<&'a str>,
}

#[get("/version")]
pub async fn version() -> Result<impl Responder, Error> {
    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

    Ok(web::Json(VersionResponse { version: VERSION }))
}
