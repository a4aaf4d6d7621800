use std::sync::Arc;
use std::time::Duration;

use price_feed::providers::PriceSource;

use crate::cache::SampleCache;
use crate::config::ServiceConfig;
use crate::service::QueryService;

/// Shared application state, passed to all route handlers via
/// `axum::extract::State`.
pub struct AppState {
    pub config: ServiceConfig,
    pub queries: QueryService,
}

impl AppState {
    /// Wires the query pipeline around an injected source so tests can
    /// substitute a mock without touching the network.
    pub fn with_source(config: ServiceConfig, source: Arc<dyn PriceSource>) -> Arc<Self> {
        let cache = SampleCache::new(
            source.clone(),
            Duration::from_secs(config.cache_ttl_secs),
        );
        Arc::new(Self {
            queries: QueryService::new(cache, source),
            config,
        })
    }
}
