//! Caller-supplied partial reading.
//!
//! Every sensor field is optional; the store synthesizes whatever is absent.
//! `id` is never taken from callers.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::reading::{FeedingStatus, GeoPoint, SignalStrength};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReadingDraft {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub activity_level: Option<f64>,
    #[serde(default)]
    pub feeding_status: Option<FeedingStatus>,
    #[serde(default)]
    pub water_level: Option<f64>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    pub battery_level: Option<f64>,
    #[serde(default)]
    pub signal_strength: Option<SignalStrength>,
}

impl ReadingDraft {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
