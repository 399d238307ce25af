//! Stored sensor reading (JSON, snake_case on the wire).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique reading identifier, assigned by the store at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingId(Uuid);

impl ReadingId {
    /// Build a v4 id from 16 random bytes (version/variant bits are forced).
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedingStatus {
    Fed,
    Hungry,
}

impl FeedingStatus {
    pub const ALL: [FeedingStatus; 2] = [FeedingStatus::Fed, FeedingStatus::Hungry];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStrength {
    Weak,
    Medium,
    Strong,
}

impl SignalStrength {
    pub const ALL: [SignalStrength; 3] =
        [SignalStrength::Weak, SignalStrength::Medium, SignalStrength::Strong];
}

/// Geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One timestamped snapshot of a tracked animal's sensor values.
///
/// Numeric fields carry documented plausible ranges (see `synth`) but are
/// never validated against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: ReadingId,
    /// Key into an external animal registry (not owned here).
    pub animal_id: String,
    pub timestamp: DateTime<Utc>,
    /// Body temperature, °C.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Activity, percent.
    pub activity_level: f64,
    pub feeding_status: FeedingStatus,
    /// Water trough level, percent.
    pub water_level: f64,
    pub location: GeoPoint,
    /// Collar battery, percent.
    pub battery_level: f64,
    pub signal_strength: SignalStrength,
}
