use crate::{
    configuration::Config,
    dao::{PoolOption, PoolType},
    error::Error,
    model::{Price_History, Table, Wallet},
};

#[derive(Debug)]
pub struct DatabasePool {
    pub price_history: Table<Price_History>,
    pub wallet: Table<Wallet>,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        let pool = PoolOption::new()
            .max_connections(config.max_connections)
            .connect(config.database_url.as_str())
            .await?;

        Ok(DatabasePool::from_pool(pool))
    }

    pub fn from_pool(pool: PoolType) -> DatabasePool {
        DatabasePool {
            price_history: Table::new(pool.clone()),
            wallet: Table::new(pool),
        }
    }
}
