//! Record retrieval service for the analytics page.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Service fetching a record for display.
///
/// Unlike [`crate::application::services::RedirectService`], viewing
/// analytics does not count as a visit.
pub struct AnalyticsService<S: MappingStore> {
    store: Arc<S>,
}

impl<S: MappingStore> AnalyticsService<S> {
    /// Creates a new analytics service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Retrieves the record for a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown tokens.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn stats(&self, token: &str) -> Result<UrlRecord, AppError> {
        self.store
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown token", json!({ "token": token })))
    }
}
