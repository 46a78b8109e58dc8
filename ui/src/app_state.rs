use api::ApiError;
use api::BackendConfig;
use api::HttpBackend;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateData {
    pub config: BackendConfig,
    pub backend: HttpBackend,
}

/// Shared, non-reactive state provided to every screen through context.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl PartialEq for AppState {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
        let backend = HttpBackend::new(&config)?;
        Ok(Self(Arc::new(AppStateData { config, backend })))
    }
}
