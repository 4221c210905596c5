//! GraphQL endpoint and GraphiQL explorer

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};

use crate::http::extractors::GraphQLPayload;
use crate::http::server::AppState;

/// GET/POST /graphql - execute a query against the schema
///
/// Execution errors come back inside the `application/json` body with
/// status 200.
async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    GraphQLPayload(request): GraphQLPayload,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// GET / - interactive query explorer
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// GraphQL routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(graphiql))
        .route("/graphql", get(graphql_handler).post(graphql_handler))
}
