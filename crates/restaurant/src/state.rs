use crate::di::{DependenciesInject, DependenciesInjectDeps, ServiceSettings};
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub async fn new(deps: DependenciesInjectDeps, settings: ServiceSettings) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let di_container = DependenciesInject::new(deps, settings, registry.clone()).await;

        Self {
            di_container,
            registry,
        }
    }

    /// Everything in process memory, for tests and local runs.
    pub async fn in_memory(settings: ServiceSettings) -> Self {
        Self::new(DependenciesInjectDeps::in_memory(), settings).await
    }
}
