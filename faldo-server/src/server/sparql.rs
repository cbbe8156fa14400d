use axum::{
    Form, Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use faldo_core::results::MEDIA_TYPE;
use serde::Deserialize;
use tracing::info;

use crate::server::{self, Context, Error};

pub fn router() -> Router<Context> {
    Router::new().route("/sparql", get(query).post(query_form))
}

#[derive(Deserialize)]
struct QueryParams {
    query: Option<String>,
}

/// Evaluates a range query given in the query string.
#[utoipa::path(
    get,
    path = "/sparql",
    operation_id = "sparql-query",
    params(
        ("query" = String, Query, description = "SPARQL query text with an optional `faldo:reference` and `?start >=`/`?end <=` filter"),
    ),
    responses(
        (status = OK, description = "Matching features as SPARQL 1.1 Query Results JSON"),
        (status = BAD_REQUEST, description = "The query is missing or has an invalid bound"),
    ),
)]
async fn query(
    State(ctx): State<Context>,
    Query(params): Query<QueryParams>,
) -> server::Result<Response> {
    evaluate(&ctx, params)
}

/// Evaluates a range query given as a URL-encoded form.
#[utoipa::path(
    post,
    path = "/sparql",
    operation_id = "sparql-query-form",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "A form with a `query` field",
    ),
    responses(
        (status = OK, description = "Matching features as SPARQL 1.1 Query Results JSON"),
        (status = BAD_REQUEST, description = "The query is missing or has an invalid bound"),
    ),
)]
async fn query_form(
    State(ctx): State<Context>,
    Form(params): Form<QueryParams>,
) -> server::Result<Response> {
    evaluate(&ctx, params)
}

fn evaluate(ctx: &Context, params: QueryParams) -> server::Result<Response> {
    let query = params
        .query
        .filter(|query| !query.is_empty())
        .ok_or(Error::MissingQuery)?;

    info!(%query, "received query");

    let results = faldo_core::evaluate(ctx.features.as_ref(), &query)?;
    let body = results.to_vec()?;

    info!(binding_count = results.len(), "returned features");

    Ok(([(header::CONTENT_TYPE, MEDIA_TYPE)], body).into_response())
}
