//! Bounded per-animal metrics store.
//!
//! - `animal_log`: one animal's insertion-ordered, capped reading log
//! - `metrics_store`: the shared store (single lock, injected sources)

mod animal_log;
pub mod metrics_store;

pub use metrics_store::{MetricsStore, QueryPage, StoreStats};

/// Maximum readings retained per animal; oldest are evicted first.
pub const RETENTION_CAP: usize = 100;

/// Longest history window accepted by `MetricsStore::history`, in hours.
pub const MAX_HISTORY_HOURS: u32 = 168;
