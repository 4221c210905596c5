//! Mapping of store and validation errors into GraphQL errors
//!
//! Every error carries an `extensions.code`. Database failures are logged
//! and reported with a generic message.

use async_graphql::{Error, ErrorExtensions};

use crate::db::StoreError;
use crate::models::ValidationError;

impl ErrorExtensions for StoreError {
    fn extend(&self) -> Error {
        let (message, code) = match self {
            StoreError::NotFound { .. } => (self.to_string(), "NOT_FOUND"),
            StoreError::ConstraintViolation { .. } => (self.to_string(), "CONSTRAINT_VIOLATION"),
            StoreError::Conflict { .. } => (self.to_string(), "CONFLICT"),
            StoreError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ("an internal error occurred".to_owned(), "INTERNAL")
            }
        };

        Error::new(message).extend_with(|_, ext| ext.set("code", code))
    }
}

impl ErrorExtensions for ValidationError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", "VALIDATION"))
    }
}
