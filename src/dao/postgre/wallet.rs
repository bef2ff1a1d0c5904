use chrono::{DateTime, Utc};
use sqlx::{types::BigDecimal, Error};

use crate::model::{Table, Wallet, WALLET_ID};

impl Table<Wallet> {
    pub async fn get(&self) -> Result<Wallet, Error> {
        const SQL: &str = r#"
        SELECT
            "id",
            "balance",
            "updated_at"
        FROM "wallet"
        WHERE "id" = $1
        "#;

        sqlx::query_as(SQL)
            .bind(WALLET_ID)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn update(
        &self,
        balance: BigDecimal,
        updated_at: DateTime<Utc>,
    ) -> Result<Wallet, Error> {
        const SQL: &str = r#"
        UPDATE "wallet"
        SET
            "balance" = $1,
            "updated_at" = $2
        WHERE "id" = $3
        RETURNING "id", "balance", "updated_at"
        "#;

        sqlx::query_as(SQL)
            .bind(balance)
            .bind(updated_at)
            .bind(WALLET_ID)
            .fetch_one(&self.pool)
            .await
    }
}
