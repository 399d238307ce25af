//! Shared application state for the herdwatch gateway.
//!
//! Owns the config, the metrics store and the metrics registry. Startup
//! errors (bad seed ids) surface as `Result` instead of panicking.

use std::sync::Arc;

use herdwatch_core::error::{HerdError, Result};
use herdwatch_core::MetricsStore;

use crate::config::HerdwatchConfig;
use crate::obs::{ExtraMetric, GatewayMetrics};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<MetricsStore>,
}

struct AppStateInner {
    cfg: HerdwatchConfig,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build state with a production store (thread RNG, system clock).
    pub fn new(cfg: HerdwatchConfig) -> Result<Self> {
        Self::with_store(cfg, Arc::new(MetricsStore::new()))
    }

    /// Build state around an existing store, seeding the configured demo
    /// animals with one synthesized reading each.
    pub fn with_store(cfg: HerdwatchConfig, store: Arc<MetricsStore>) -> Result<Self> {
        for animal_id in &cfg.store.seed_animals {
            store.simulate(animal_id).map_err(|e| {
                HerdError::BadRequest(format!("seeding failed (animal={animal_id}): {e}"))
            })?;
        }
        if !cfg.store.seed_animals.is_empty() {
            tracing::info!(animals = cfg.store.seed_animals.len(), "demo readings seeded");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: GatewayMetrics::default(),
            }),
            store,
        })
    }

    pub fn cfg(&self) -> &HerdwatchConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &MetricsStore {
        &self.store
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Store gauges appended to the `/metrics` output.
    pub fn metrics_extra(&self) -> Vec<ExtraMetric> {
        let stats = match self.store.stats() {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "store stats unavailable");
                return Vec::new();
            }
        };
        vec![
            ExtraMetric { name: "herdwatch_store_animals", kind: "gauge", value: stats.animals as u64 },
            ExtraMetric { name: "herdwatch_store_readings", kind: "gauge", value: stats.readings as u64 },
            ExtraMetric { name: "herdwatch_store_appended_total", kind: "counter", value: stats.appended },
            ExtraMetric { name: "herdwatch_store_evicted_total", kind: "counter", value: stats.evicted },
        ]
    }
}
