//! Handler for the shorten endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "originalURL": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortURL": "http://localhost:8080/ab12CD", "tokenId": "ab12CD" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON; no record is created.
/// Returns 500 Internal Server Error when the store fails or token
/// generation keeps colliding.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid JSON format", json!({ "reason": rejection.body_text() }))
    })?;

    let record = state.shorten_service.shorten(request.original_url).await?;

    let short_url = state.shorten_service.short_url(&record.token);

    Ok(Json(ShortenResponse {
        short_url,
        token_id: record.token,
    }))
}
