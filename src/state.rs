use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AnalyticsService, RedirectService, ShortenService};
use crate::infrastructure::persistence::SqliteMappingStore;

/// Shared application state injected into all handlers.
///
/// Services are parameterized over the concrete store so the whole state
/// stays cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteMappingStore>>,
    pub redirect_service: Arc<RedirectService<SqliteMappingStore>>,
    pub analytics_service: Arc<AnalyticsService<SqliteMappingStore>>,
    /// Kept alongside the services for the health check.
    pub db: SqlitePool,
}

impl AppState {
    /// Wires all services around a single shared mapping store.
    pub fn new(db: SqlitePool, base_url: String) -> Self {
        let store = Arc::new(SqliteMappingStore::new(Arc::new(db.clone())));

        Self {
            shorten_service: Arc::new(ShortenService::new(store.clone(), base_url)),
            redirect_service: Arc::new(RedirectService::new(store.clone())),
            analytics_service: Arc::new(AnalyticsService::new(store)),
            db,
        }
    }
}
