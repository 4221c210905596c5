//! Root mutation: create and update

use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::store;
use crate::models::{NewTodo, Todo, TodoChanges, TodoText};

#[derive(Debug, Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create new todo
    async fn create_todo(&self, ctx: &Context<'_>, text: String) -> Result<Option<Todo>> {
        let text = TodoText::new(&text).map_err(|e| e.extend())?;

        let todo = store(ctx)?
            .insert(NewTodo::new(text))
            .await
            .map_err(|e| e.extend())?;

        tracing::debug!(id = todo.id, "Created todo");
        Ok(Some(todo))
    }

    /// Update existing todo, mark it done or not done
    ///
    /// Only the supplied fields are written. The returned todo is re-read
    /// from the store after the write.
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: i64,
        done: Option<bool>,
        text: Option<String>,
    ) -> Result<Option<Todo>> {
        let text = text
            .as_deref()
            .map(TodoText::new)
            .transpose()
            .map_err(|e| e.extend())?;

        let store = store(ctx)?;
        let existing = store.get_by_id(id).await.map_err(|e| e.extend())?;

        let changes = TodoChanges {
            text: text.map(TodoText::into_string),
            done,
        };
        store
            .update_columns(id, existing.version, changes)
            .await
            .map_err(|e| e.extend())?;

        let todo = store.get_by_id(id).await.map_err(|e| e.extend())?;
        tracing::debug!(id, version = todo.version, "Updated todo");
        Ok(Some(todo))
    }
}
