use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{error::Error, helpers::to_f64, model::Price_History};

#[derive(Debug, Deserialize)]
pub struct AddPrice {
    pub price: f64,
    #[serde(alias = "priceDate")]
    pub price_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    pub id: i64,
    pub price: f64,
    pub price_date: DateTime<Utc>,
}

impl TryFrom<Price_History> for PriceRecord {
    type Error = Error;

    fn try_from(value: Price_History) -> Result<Self, Self::Error> {
        Ok(PriceRecord {
            id: value.id,
            price: to_f64(&value.price)?,
            price_date: value.price_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sqlx::types::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn test_price_record_from_row() {
        let price_date = Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap();
        let row = Price_History {
            id: 3,
            price: BigDecimal::from_str("101.50000000").unwrap(),
            price_date,
        };

        let record = PriceRecord::try_from(row).unwrap();

        assert_eq!(
            record,
            PriceRecord {
                id: 3,
                price: 101.5,
                price_date,
            }
        );
    }

    #[test]
    fn test_add_price_accepts_camel_case_date() {
        let body: AddPrice = serde_json::from_str(
            r#"{"price": 99.9, "priceDate": "2025-12-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(body.price, 99.9);
        assert_eq!(
            body.price_date,
            Utc.with_ymd_and_hms(2025, 12, 1, 10, 0, 0).unwrap()
        );
    }
}
