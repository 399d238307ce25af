//! herdwatch gateway library entry.
//!
//! Wires config, the metrics store, the HTTP handlers and the operational
//! endpoints into one axum service. Consumed by the binary (`main.rs`) and
//! by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;
