use std::sync::Arc;

use crate::catalog::ProductCatalog;
use crate::config::Config;
use crate::storage::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable knowledge base, read concurrently by every request.
    pub catalog: Arc<ProductCatalog>,
    /// Delivery backend. `None` disables `/api/v1/timetables/deliveries`.
    pub store: Option<Arc<dyn ReportStore>>,
}

impl AppState {
    pub fn new(config: Config, catalog: Arc<ProductCatalog>) -> Self {
        Self {
            config,
            catalog,
            store: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn ReportStore>) -> Self {
        self.store = Some(store);
        self
    }
}
