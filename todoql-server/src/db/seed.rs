//! Demo data inserted into an empty store on startup

use super::store::{StoreResult, TodoStore};
use crate::models::NewTodo;

/// Seed rows as `(id, text)`; all start not done.
pub const SEED_TODOS: [(i64, &str); 3] = [
    (1, "A todo not to forget"),
    (2, "This is the most important"),
    (3, "Please do this or else"),
];

/// Insert [`SEED_TODOS`] when the store holds no rows.
///
/// Returns the number of rows inserted (0 when the store was not empty).
pub async fn seed_if_empty(store: &dyn TodoStore) -> StoreResult<usize> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::debug!(existing, "Store not empty, skipping seed");
        return Ok(0);
    }

    for (id, text) in SEED_TODOS {
        store
            .insert(NewTodo {
                id: Some(id),
                text: text.to_owned(),
                done: false,
            })
            .await?;
    }

    tracing::info!(count = SEED_TODOS.len(), "Seeded todo store");
    Ok(SEED_TODOS.len())
}
