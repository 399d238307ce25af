use std::net::SocketAddr;

use serde::Deserialize;
use herdwatch_core::error::{HerdError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HerdwatchConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub store: StoreSection,
}

impl HerdwatchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(HerdError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.store.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            HerdError::BadRequest(format!(
                "gateway.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// What `PUT /api/iot/metrics` does for an animal with no readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshMissing {
    /// Answer 200 with just a timestamp.
    #[default]
    Ignore,
    /// Answer 404.
    Reject,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_query_limit")]
    pub default_query_limit: usize,

    #[serde(default = "default_max_query_limit")]
    pub max_query_limit: usize,

    #[serde(default)]
    pub refresh_missing: RefreshMissing,

    /// Animals that get one synthesized reading at startup.
    #[serde(default)]
    pub seed_animals: Vec<String>,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            default_query_limit: default_query_limit(),
            max_query_limit: default_max_query_limit(),
            refresh_missing: RefreshMissing::default(),
            seed_animals: Vec::new(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1000).contains(&self.max_query_limit) {
            return Err(HerdError::BadRequest(
                "store.max_query_limit must be between 1 and 1000".into(),
            ));
        }
        if self.default_query_limit == 0 || self.default_query_limit > self.max_query_limit {
            return Err(HerdError::BadRequest(
                "store.default_query_limit must be between 1 and max_query_limit".into(),
            ));
        }
        if self.seed_animals.iter().any(|id| id.trim().is_empty()) {
            return Err(HerdError::BadRequest(
                "store.seed_animals must not contain empty ids".into(),
            ));
        }
        Ok(())
    }
}

fn default_query_limit() -> usize {
    10
}
fn default_max_query_limit() -> usize {
    100
}
