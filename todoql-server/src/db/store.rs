//! Store capability used by the GraphQL resolvers

use async_trait::async_trait;

use crate::models::{NewTodo, Todo, TodoChanges};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("todo {id} not found")]
    NotFound { id: i64 },

    #[error("constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("todo {id} was modified concurrently (expected version {expected_version}, found {found_version})")]
    Conflict {
        id: i64,
        expected_version: i64,
        found_version: i64,
    },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence capability for todos.
///
/// Implementations own all mutable state; callers hold a shared handle.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Fetch one todo. Fails with [`StoreError::NotFound`] when no row matches.
    async fn get_by_id(&self, id: i64) -> StoreResult<Todo>;

    /// Every todo, in store-defined order. Empty when there are no rows.
    async fn find_all(&self) -> StoreResult<Vec<Todo>>;

    /// Persist a new todo and return the stored row.
    ///
    /// Fails with [`StoreError::ConstraintViolation`] on a duplicate id.
    async fn insert(&self, todo: NewTodo) -> StoreResult<Todo>;

    /// Write only the columns set in `changes`, guarded by `expected_version`.
    ///
    /// Bumps `version` on success. Fails with [`StoreError::NotFound`] when
    /// the row is missing and [`StoreError::Conflict`] when its version moved.
    async fn update_columns(
        &self,
        id: i64,
        expected_version: i64,
        changes: TodoChanges,
    ) -> StoreResult<Todo>;

    /// Number of persisted todos.
    async fn count(&self) -> StoreResult<i64>;
}
