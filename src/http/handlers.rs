//! Passthrough handlers.
//!
//! # Responsibilities
//! - Validate inbound query parameters (presence only)
//! - Build the upstream query URL
//! - Relay the upstream status, content length, content type, and body
//!   stream without buffering
//! - Map upstream failures to status codes; nothing propagates past the
//!   handler boundary

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::http::server::AppState;

/// Fixed disposition attached to every relayed response.
pub const ATTACHMENT_DISPOSITION: &str = "attachment; filename=\"test-stockbit\"";

/// `GET /home` — landing probe.
pub async fn landing() -> impl IntoResponse {
    Json(json!({ "status": "hello" }))
}

/// Query parameters for the search route. Absent parameters deserialize
/// to empty strings and are treated the same as empty ones.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub searchword: String,
    #[serde(default)]
    pub pagination: String,
}

/// `GET /movie` — search the movie database.
///
/// Missing or empty `searchword`/`pagination` is answered locally with
/// 404 and no upstream call.
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    if params.searchword.is_empty() || params.pagination.is_empty() {
        tracing::warn!("searchword or pagination is not defined");
        return (StatusCode::NOT_FOUND, Json(json!({ "status": "404" }))).into_response();
    }

    let url = state
        .settings
        .upstream
        .search_url(&params.searchword, &params.pagination);
    relay(&state, &url).await
}

/// `GET /movie/{id}` — look up a movie by id.
///
/// No emptiness check on `id`; an empty id still produces a well-formed
/// upstream query.
pub async fn movie_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let url = state.settings.upstream.lookup_url(&id);
    relay(&state, &url).await
}

/// Forward a fully-built upstream URL and relay the response.
///
/// The upstream body is handed to the outbound writer as a stream; it is
/// never buffered in full. On every early return the `reqwest::Response`
/// is dropped, which closes the upstream connection.
async fn relay(state: &AppState, url: &str) -> Response {
    tracing::info!(url = %url, "go to upstream");

    let upstream = match state.upstream.get(url).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(error = %error, "upstream request failed");
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    };

    let status = upstream.status();
    if status != reqwest::StatusCode::OK {
        tracing::error!(status = %status, "upstream returned non-200");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    let content_length = upstream.content_length();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE.as_str())
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(ATTACHMENT_DISPOSITION),
    );
    if let Some(length) = content_length {
        headers.insert(header::CONTENT_LENGTH, HeaderValue::from(length));
    }
    if let Some(content_type) = content_type.and_then(|value| HeaderValue::from_str(&value).ok()) {
        headers.insert(header::CONTENT_TYPE, content_type);
    }

    response
}
