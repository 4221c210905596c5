//! Custom Axum extractors

use async_graphql::Variables;
use async_graphql_axum::rejection::GraphQLRejection;
use async_graphql_axum::GraphQLRequest;
use axum::extract::{FromRequest, Query, Request};
use serde::Deserialize;

use super::error::ApiError;

/// GraphQL parameters carried in the URL
#[derive(Debug, Default, Deserialize)]
struct UrlParams {
    query: Option<String>,
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
    /// JSON-encoded variables object
    variables: Option<String>,
}

/// Decoded GraphQL request.
///
/// A `query` parameter in the URL wins for any method; otherwise the request
/// is decoded the standard way (GET query string or POST body). Decode
/// failures reject with a plain-text 400.
pub struct GraphQLPayload(pub async_graphql::Request);

impl<S> FromRequest<S> for GraphQLPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<UrlParams>::try_from_uri(req.uri())
            .map(|Query(params)| params)
            .unwrap_or_default();

        let request = match params.query {
            Some(query) => from_url_params(query, params.operation_name, params.variables)?,
            None => <GraphQLRequest as FromRequest<S>>::from_request(req, state)
                .await
                .map_err(|GraphQLRejection(e)| ApiError::BadRequest {
                    message: e.to_string(),
                })?
                .into_inner(),
        };

        require_query(request).map(Self)
    }
}

/// Reject requests that decoded without any query text
fn require_query(request: async_graphql::Request) -> Result<async_graphql::Request, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::BadRequest {
            message: "missing query".into(),
        });
    }

    Ok(request)
}

fn from_url_params(
    query: String,
    operation_name: Option<String>,
    variables: Option<String>,
) -> Result<async_graphql::Request, ApiError> {
    let mut request = async_graphql::Request::new(query);

    if let Some(name) = operation_name {
        request = request.operation_name(name);
    }

    if let Some(raw) = variables.filter(|v| !v.trim().is_empty()) {
        let json: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| ApiError::BadRequest {
                message: format!("invalid variables: {}", e),
            })?;
        request = request.variables(Variables::from_json(json));
    }

    Ok(request)
}
