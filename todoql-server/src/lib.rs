//! todoql-server: GraphQL CRUD over a single `Todo` entity
//!
//! Wires an async-graphql schema to a SQLite store and serves it over
//! axum alongside a GraphiQL explorer.

pub mod db;
pub mod graphql;
pub mod http;
pub mod models;

pub use db::{SqliteTodoStore, StoreError, TodoStore};
pub use graphql::{build_schema, SharedStore, TodoSchema};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use models::{NewTodo, Todo, TodoChanges};
