//! Token resolution service backing the redirect endpoint.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::MappingStore;
use crate::error::AppError;

/// Service resolving tokens to their original URLs.
///
/// Every successful resolution counts a visit. The counter update is
/// best-effort: a failed increment is logged and the caller still gets the
/// record, so the redirect goes out regardless.
pub struct RedirectService<S: MappingStore> {
    store: Arc<S>,
}

impl<S: MappingStore> RedirectService<S> {
    /// Creates a new redirect service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Looks up a token and counts the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown tokens and
    /// [`AppError::Storage`] when the lookup itself fails.
    pub async fn resolve(&self, token: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .store
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown token", json!({ "token": token })))?;

        if let Err(e) = self.store.increment_visits(token).await {
            tracing::warn!(token, error = %e, "failed to update visit counter");
        }

        Ok(record)
    }
}
