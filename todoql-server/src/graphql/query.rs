//! Root query: single-todo lookup and list-all

use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::store;
use crate::models::Todo;

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Get single todo. Without an `id` the empty todo is returned.
    async fn todo(&self, ctx: &Context<'_>, id: Option<i64>) -> Result<Option<Todo>> {
        let Some(id) = id else {
            return Ok(Some(Todo::default()));
        };

        tracing::debug!(id, "Resolving todo");
        let todo = store(ctx)?.get_by_id(id).await.map_err(|e| e.extend())?;
        Ok(Some(todo))
    }

    /// List of todos
    async fn todo_list(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Todo>>>> {
        let todos = store(ctx)?.find_all().await.map_err(|e| e.extend())?;
        tracing::debug!(count = todos.len(), "Resolved todo list");
        Ok(Some(todos.into_iter().map(Some).collect()))
    }
}
