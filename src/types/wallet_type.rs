use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::Error, helpers::to_f64, model::Wallet};

#[derive(Debug, Deserialize)]
pub struct UpdateWallet {
    pub balance: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WalletRecord {
    pub id: i64,
    pub balance: f64,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Wallet> for WalletRecord {
    type Error = Error;

    fn try_from(value: Wallet) -> Result<Self, Self::Error> {
        Ok(WalletRecord {
            id: value.id,
            balance: to_f64(&value.balance)?,
            updated_at: value.updated_at,
        })
    }
}
