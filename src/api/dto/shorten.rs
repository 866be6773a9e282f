//! DTOs for the shorten endpoint.
//!
//! Field names follow the public API contract (`originalURL`, `shortURL`,
//! `tokenId`) rather than Rust naming.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// The URL is accepted as-is; only the JSON envelope is validated.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(rename = "originalURL")]
    pub original_url: String,
}

/// Response with the generated short URL and its token.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,
    #[serde(rename = "tokenId")]
    pub token_id: String,
}
