//! herdwatch core: sensor reading model, synthetic generation, and the
//! bounded per-animal metrics store.
//!
//! This crate carries no transport or runtime dependencies so the store can be
//! driven by the HTTP gateway, by tests, or embedded elsewhere.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `HerdError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod source;
pub mod store;
pub mod synth;

/// Shared result type.
pub use error::{Result, HerdError};
pub use model::{FeedingStatus, GeoPoint, ReadingDraft, ReadingId, SensorReading, SignalStrength};
pub use store::{MetricsStore, QueryPage, StoreStats, RETENTION_CAP};
