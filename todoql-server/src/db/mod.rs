//! Database layer - connection pool, migrations and the todo store
//!
//! # Design Principles
//!
//! - One pool built at startup and shared; never reopened per request
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Optimistic locking through the `version` column

pub mod migrations;
pub mod pool;
pub mod seed;
pub mod sqlite;
pub mod store;

pub use pool::{
    create_pool, create_pool_with_options, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS,
};
pub use seed::seed_if_empty;
pub use sqlite::SqliteTodoStore;
pub use store::{StoreError, StoreResult, TodoStore};
