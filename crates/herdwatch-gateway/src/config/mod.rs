//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use herdwatch_core::error::{HerdError, Result};

pub use schema::{GatewaySection, HerdwatchConfig, RefreshMissing, StoreSection};

/// Used when `HERDWATCH_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "herdwatch.yaml";

pub fn load_from_file(path: &str) -> Result<HerdwatchConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| HerdError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<HerdwatchConfig> {
    let cfg: HerdwatchConfig = serde_yaml::from_str(s)
        .map_err(|e| HerdError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
