//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted token→URL mapping with its visit counter.
///
/// The token doubles as the record's identity and is immutable once created.
/// The visit counter only ever grows; records are never deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlRecord {
    pub token: String,
    pub original_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(token: String, original_url: String, visits: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            token,
            original_url,
            visits,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// Visits are not part of the input; every record starts at zero.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub token: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}
