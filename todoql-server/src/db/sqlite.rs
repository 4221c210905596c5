//! SQLite todo store
//!
//! - insert: relies on the primary key constraint (no check-then-insert)
//! - update: single guarded UPDATE ... RETURNING, version bumped in SQL

use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::store::{StoreError, StoreResult, TodoStore};
use crate::models::{NewTodo, Todo, TodoChanges};

/// Todo store backed by a shared SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn get_by_id(&self, id: i64) -> StoreResult<Todo> {
        sqlx::query_as::<_, Todo>("SELECT id, text, done, version FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let todos =
            sqlx::query_as::<_, Todo>("SELECT id, text, done, version FROM todos ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(todos)
    }

    async fn insert(&self, todo: NewTodo) -> StoreResult<Todo> {
        // A NULL id lets SQLite assign the next rowid
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (id, text, done) VALUES (?, ?, ?)
            RETURNING id, text, done, version
            "#,
        )
        .bind(todo.id)
        .bind(&todo.text)
        .bind(todo.done)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StoreError::ConstraintViolation {
                    message: db.message().to_owned(),
                }
            }
            other => StoreError::Database(other),
        })
    }

    async fn update_columns(
        &self,
        id: i64,
        expected_version: i64,
        changes: TodoChanges,
    ) -> StoreResult<Todo> {
        if changes.is_empty() {
            return self.get_by_id(id).await;
        }

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE todos SET ");
        {
            let mut set = query.separated(", ");
            if let Some(text) = changes.text {
                set.push("text = ").push_bind_unseparated(text);
            }
            if let Some(done) = changes.done {
                set.push("done = ").push_bind_unseparated(done);
            }
            set.push("version = version + 1");
        }
        query
            .push(" WHERE id = ")
            .push_bind(id)
            .push(" AND version = ")
            .push_bind(expected_version)
            .push(" RETURNING id, text, done, version");

        let updated = query
            .build_query_as::<Todo>()
            .fetch_optional(&self.pool)
            .await?;

        match updated {
            Some(todo) => Ok(todo),
            // Zero rows: either the id is gone or the version moved
            None => {
                let current = self.get_by_id(id).await?;
                Err(StoreError::Conflict {
                    id,
                    expected_version,
                    found_version: current.version,
                })
            }
        }
    }

    async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
