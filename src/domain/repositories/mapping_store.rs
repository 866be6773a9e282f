//! Store trait for token→URL mapping persistence.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Persistence interface for token→URL mappings and their visit counters.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingStore`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Persists a new mapping with a zero visit count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the token already exists; the
    /// caller decides whether to regenerate and retry.
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a mapping by its token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_token(&self, token: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically increments the visit counter for a token.
    ///
    /// The increment is a single in-place UPDATE at the store layer, never a
    /// client-side read-modify-write, so concurrent visits are not lost.
    ///
    /// Returns `Ok(true)` if a record was updated, `Ok(false)` if the token
    /// is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_visits(&self, token: &str) -> Result<bool, AppError>;
}
