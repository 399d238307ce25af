//! HTTP surface for the metrics store.
//!
//! - `error`: `ApiError` -> JSON error body + status
//! - `metrics_api`: `/api/iot/metrics` handlers
//! - `tracking`: per-request counters and latency

pub mod error;
pub mod metrics_api;
pub mod tracking;

pub use error::{ApiError, ApiResult};
