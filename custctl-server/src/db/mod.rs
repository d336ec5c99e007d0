//! Database layer - connection pool, schema and repositories
//!
//! - One `PgPool` per process, injected through `AppState`
//! - Every statement uses bound placeholders
//! - Single autocommit statements, no explicit transactions

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::ensure_schema;
