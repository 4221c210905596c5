//! GraphQL schema: `Todo` object, query root and mutation root
//!
//! The store handle is injected once as schema data and shared by every
//! resolver; resolvers never open their own connections.

mod error;
mod mutation;
mod query;

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Schema, SchemaBuilder};

use crate::db::TodoStore;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// GraphQL schema type
pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Store handle shared through schema data
pub type SharedStore = Arc<dyn TodoStore>;

/// Schema builder without data attached (SDL export, tests)
pub fn schema_builder() -> SchemaBuilder<QueryRoot, MutationRoot, EmptySubscription> {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
}

/// Create the executable schema around a shared store
pub fn build_schema(store: SharedStore) -> TodoSchema {
    schema_builder().data(store).finish()
}

/// Render the schema as SDL
pub fn sdl() -> String {
    schema_builder().finish().sdl()
}

fn store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}
