use std::sync::Arc;

use crate::config::ScanSettings;
use crate::models::Catalog;
use crate::services::MetadataProvider;

/// Shared application state
///
/// Everything here is read-only once the server starts; each request builds
/// its own scan results.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MetadataProvider>,
    pub catalog: Arc<Catalog>,
    pub settings: ScanSettings,
}

impl AppState {
    pub fn new(provider: Arc<dyn MetadataProvider>, catalog: Catalog, settings: ScanSettings) -> Self {
        Self {
            provider,
            catalog: Arc::new(catalog),
            settings,
        }
    }
}
