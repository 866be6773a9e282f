//! Handler for the per-token analytics page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the analytics page.
///
/// Renders `templates/analytics.html` with the record fields. Render
/// failures surface as 500 via the `WebTemplate` integration.
#[derive(Template, WebTemplate)]
#[template(path = "analytics.html")]
pub struct AnalyticsTemplate {
    pub token: String,
    pub original_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

/// Renders visit statistics for a token.
///
/// # Endpoint
///
/// `GET /analytics/{token}`
///
/// Viewing the page does not count as a visit.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't exist.
pub async fn analytics_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<AnalyticsTemplate, AppError> {
    let record = state.analytics_service.stats(&token).await?;

    Ok(AnalyticsTemplate {
        token: record.token,
        original_url: record.original_url,
        visits: record.visits,
        created_at: record.created_at,
    })
}
