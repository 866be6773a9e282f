//! # snaplink
//!
//! A small URL shortening service with visit analytics, built with Axum and SQLx.
//!
//! ## Architecture
//!
//! The crate follows a layered structure with clear separation of concerns:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the mapping-store trait
//! - **Application Layer** ([`application`]) - Shorten, redirect, and analytics services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence via SQLx
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character alphanumeric tokens with collision retry
//! - Atomic visit counting at the store layer (no lost updates)
//! - Server-rendered analytics page per token
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides; defaults suit local development
//! export DATABASE_URL="sqlite:snaplink.db"
//! export BASE_URL="http://localhost:8080"
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, RedirectService, ShortenService};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
