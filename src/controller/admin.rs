//! Admin API endpoints
//!
//! Password login backed by a cookie session, and the session-gated
//! mutations for recorded prices, the wallet balance and the synthetic
//! series.

use actix_web::{
    delete, post, put, web, HttpRequest, HttpResponse, Responder,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    configuration::{AppState, State},
    error::Error,
    helpers::{auth_cookie, removal_auth_cookie, require_admin, to_decimal},
    types::{AddPrice, Login, PriceRecord, UpdateWallet, WalletRecord},
};

// =============================================================================
// Session
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorrect: Option<bool>,
}

#[post("/login")]
pub async fn login(
    state: web::Data<AppState<State>>,
    form: web::Form<Login>,
) -> Result<HttpResponse, Error> {
    if form.password != state.config.admin_password {
        warn!("Rejected admin login attempt");
        return Ok(HttpResponse::Unauthorized().json(LoginResponse {
            success: None,
            incorrect: Some(true),
        }));
    }

    info!("Admin logged in");

    Ok(HttpResponse::Ok().cookie(auth_cookie()).json(LoginResponse {
        success: Some(true),
        incorrect: None,
    }))
}

#[post("/logout")]
pub async fn logout() -> Result<HttpResponse, Error> {
    Ok(HttpResponse::Ok()
        .cookie(removal_auth_cookie())
        .json(LoginResponse {
            success: Some(true),
            incorrect: None,
        }))
}

// =============================================================================
// Recorded prices
// =============================================================================

#[post("/prices")]
pub async fn add_price(
    state: web::Data<AppState<State>>,
    req: HttpRequest,
    data: web::Json<AddPrice>,
) -> Result<impl Responder, Error> {
    require_admin(&req)?;

    let price = to_decimal(data.price, "price")?;
    let item = state
        .database
        .price_history
        .insert(price, data.price_date)
        .await?;

    info!("Recorded price {} at {}", item.price, item.price_date);

    Ok(web::Json(PriceRecord::try_from(item)?))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub result: bool,
}

#[delete("/prices/{id}")]
pub async fn delete_price(
    state: web::Data<AppState<State>>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<impl Responder, Error> {
    require_admin(&req)?;

    let id = path.into_inner();
    let result = state.database.price_history.delete(id).await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("price record {}", id)));
    }

    info!("Deleted price record {}", id);

    Ok(web::Json(DeleteResponse { result: true }))
}

// =============================================================================
// Wallet
// =============================================================================

#[put("/wallet")]
pub async fn update_wallet(
    state: web::Data<AppState<State>>,
    req: HttpRequest,
    data: web::Json<UpdateWallet>,
) -> Result<impl Responder, Error> {
    require_admin(&req)?;

    let balance = to_decimal(data.balance, "balance")?;
    let wallet = state.database.wallet.update(balance, Utc::now()).await?;

    info!("Wallet balance set to {}", wallet.balance);

    Ok(web::Json(WalletRecord::try_from(wallet)?))
}

// =============================================================================
// Synthetic series
// =============================================================================

#[post("/regenerate")]
pub async fn regenerate(
    state: web::Data<AppState<State>>,
    req: HttpRequest,
) -> Result<impl Responder, Error> {
    require_admin(&req)?;

    let view = {
        let mut prices = state.prices()?;
        prices.regenerate(Utc::now());
        info!("Regenerated {} price samples", prices.all().len());
        prices.snapshot()
    };

    Ok(web::Json(view))
}
