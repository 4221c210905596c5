//! Todo entity and its insert/update shapes

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for todo text, in characters
pub const MAX_TODO_TEXT_LEN: usize = 1024;

/// A persisted todo row.
///
/// The same struct maps the `todos` row and the GraphQL `Todo` object.
/// The optimistic-lock counter is skipped on the GraphQL side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, SimpleObject)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub done: bool,
    #[graphql(skip)]
    pub version: i64,
}

/// Insert shape. `id: None` lets the store assign the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub id: Option<i64>,
    pub text: String,
    pub done: bool,
}

impl NewTodo {
    /// A fresh, not-done todo with a store-assigned id.
    pub fn new(text: TodoText) -> Self {
        Self {
            id: None,
            text: text.into_string(),
            done: false,
        }
    }
}

/// Partial column set for an update. Only `Some` columns are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub text: Option<String>,
    pub done: Option<bool>,
}

impl TodoChanges {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.done.is_none()
    }
}

/// Validated todo text (free-form, bounded length)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoText(String);

impl TodoText {
    /// Create todo text, rejecting anything longer than [`MAX_TODO_TEXT_LEN`] characters.
    ///
    /// # Example
    /// ```
    /// use todoql_server::models::TodoText;
    ///
    /// assert!(TodoText::new("buy milk").is_ok());
    /// assert!(TodoText::new("").is_ok());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() > MAX_TODO_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field: "text",
                max: MAX_TODO_TEXT_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
