use chrono::{DateTime, Utc};
use sqlx::{types::BigDecimal, Error};

use crate::{
    dao::QueryResult,
    model::{Price_History, Table},
};

impl Table<Price_History> {
    pub async fn get_all(&self) -> Result<Vec<Price_History>, Error> {
        const SQL: &str = r#"
        SELECT
            "id",
            "price",
            "price_date"
        FROM "price_history"
        ORDER BY "price_date" ASC
        "#;

        sqlx::query_as(SQL).fetch_all(&self.pool).await
    }

    pub async fn insert(
        &self,
        price: BigDecimal,
        price_date: DateTime<Utc>,
    ) -> Result<Price_History, Error> {
        const SQL: &str = r#"
        INSERT INTO "price_history" (
            "price",
            "price_date"
        )
        VALUES ($1, $2)
        RETURNING "id", "price", "price_date"
        "#;

        sqlx::query_as(SQL)
            .bind(price)
            .bind(price_date)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<QueryResult, Error> {
        const SQL: &str = r#"
        DELETE FROM "price_history"
        WHERE "id" = $1
        "#;

        sqlx::query(SQL).bind(id).execute(&self.pool).await
    }
}
