//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use todoql_server::db::{create_pool, migrations, seed_if_empty};
use todoql_server::{SharedStore, SqliteTodoStore};

/// Fresh in-memory store with the table migrated and no rows
pub async fn empty_store() -> SqliteTodoStore {
    let pool = create_pool("sqlite::memory:").await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    SqliteTodoStore::new(pool)
}

/// Fresh in-memory store holding the seed rows
pub async fn seeded_store() -> SqliteTodoStore {
    let store = empty_store().await;
    seed_if_empty(&store).await.expect("seed failed");
    store
}

pub fn shared(store: SqliteTodoStore) -> SharedStore {
    Arc::new(store)
}
