//! Database models module
//!
//! Row structs for the persisted tables live in models.rs, the typed table
//! handle in table.rs.

mod models;
mod table;

pub use models::*;

pub use table::Table;
