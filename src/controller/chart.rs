//! Synthetic price chart endpoint

use actix_web::{get, web, Responder};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    configuration::{AppState, State},
    error::Error,
    series::PeriodSelector,
};

#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    period: Option<PeriodSelector>,
}

/// Selects `period` when given, otherwise recomputes the current selection
/// against the current time, and returns the derived views.
#[get("/chart")]
pub async fn chart(
    state: web::Data<AppState<State>>,
    query: web::Query<ChartQuery>,
) -> Result<impl Responder, Error> {
    let now = Utc::now();

    let view = {
        let mut prices = state.prices()?;
        match query.period {
            Some(period) => prices.select(period, now),
            None => prices.refresh(now),
        }
        prices.snapshot()
    };

    Ok(web::Json(view))
}
