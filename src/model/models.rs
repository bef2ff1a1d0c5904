//! Persisted entities
//!
//! Manually recorded price points and the singleton wallet balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{types::BigDecimal as SqlxBigDecimal, FromRow};

/// Id of the only row in the "wallet" table.
pub const WALLET_ID: i64 = 1;

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct Price_History {
    pub id: i64,
    pub price: SqlxBigDecimal,
    pub price_date: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Deserialize, Serialize)]
pub struct Wallet {
    pub id: i64,
    pub balance: SqlxBigDecimal,
    pub updated_at: DateTime<Utc>,
}
