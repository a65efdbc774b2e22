//! Shared application state for the policyfeed gateway.

use std::sync::Arc;

use policyfeed_core::PolicySource;

use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    source: Arc<PolicySource>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build application state; the data source is chosen by `data.cache`.
    pub fn new(cfg: GatewayConfig) -> Self {
        let path = cfg.data.resolved_csv_path();
        let source = if cfg.data.cache {
            PolicySource::cached(path)
        } else {
            PolicySource::uncached(path)
        };

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: GatewayMetrics::default(),
            }),
            source: Arc::new(source),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn source(&self) -> Arc<PolicySource> {
        Arc::clone(&self.source)
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Extra gauge lines appended to `/metrics`.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("policyfeed_cache_enabled", u64::from(self.source.is_cached()))]
    }
}
