//! URL shortening service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::MappingStore;
use crate::error::AppError;
use crate::utils::token_generator::generate_token;

/// Maximum number of token generation attempts before giving up.
const MAX_ATTEMPTS: usize = 5;

/// Service for creating shortened URLs.
///
/// Generates a random token, persists the record with a zero visit count and
/// the current UTC timestamp, and retries with a fresh token when the store
/// reports a collision.
pub struct ShortenService<S: MappingStore> {
    store: Arc<S>,
    base_url: String,
}

impl<S: MappingStore> ShortenService<S> {
    /// Creates a new shorten service.
    pub fn new(store: Arc<S>, base_url: String) -> Self {
        Self { store, base_url }
    }

    /// Creates a mapping for the given URL and returns the persisted record.
    ///
    /// The URL is stored as-is; its format is intentionally not validated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when [`MAX_ATTEMPTS`] consecutive
    /// token collisions occur. Store errors other than conflicts are
    /// passed through unchanged.
    pub async fn shorten(&self, original_url: String) -> Result<UrlRecord, AppError> {
        for attempt in 0..MAX_ATTEMPTS {
            let record = NewUrlRecord {
                token: generate_token(),
                original_url: original_url.clone(),
                created_at: Utc::now(),
            };

            match self.store.insert(record).await {
                Ok(created) => return Ok(created),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, "token collision, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique token",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Constructs the full short URL for a token.
    pub fn short_url(&self, token: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), token)
    }
}
