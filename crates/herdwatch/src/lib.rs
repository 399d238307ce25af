//! Top-level facade crate for herdwatch.
//!
//! Re-exports the core store and the gateway library so users can depend on a single crate.

pub mod core {
    pub use herdwatch_core::*;
}

pub mod gateway {
    pub use herdwatch_gateway::*;
}
