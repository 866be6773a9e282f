//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Request Flow
///
/// 1. Look up the record for the token
/// 2. Count the visit (best-effort; failures are logged, not surfaced)
/// 3. Return 303 See Other to the original URL
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let record = state.redirect_service.resolve(&token).await?;

    Ok(Redirect::to(&record.original_url))
}
