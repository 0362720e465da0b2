//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, MetricsService};
use crate::domain::repositories::{LinkRepository, MetricsRepository};

/// Services shared by all requests.
///
/// Built once at startup from explicitly constructed store clients; cloning
/// only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    /// Wires the services over the given stores.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        metrics_repository: Arc<dyn MetricsRepository>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            metrics_service: Arc::new(MetricsService::new(metrics_repository)),
        }
    }
}
