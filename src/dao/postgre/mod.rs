pub use self::types::{PoolOption, PoolType, QueryResult};

mod price_history;
mod types;
mod wallet;
