//! Business logic services.
//!
//! Services sit between HTTP handlers and the mapping store:
//!
//! - [`ShortenService`] - token generation and record creation
//! - [`RedirectService`] - token resolution with visit counting
//! - [`AnalyticsService`] - record retrieval for the analytics page

pub mod analytics_service;
pub mod redirect_service;
pub mod shorten_service;

pub use analytics_service::AnalyticsService;
pub use redirect_service::RedirectService;
pub use shorten_service::ShortenService;
