//! Synthetic reading generation.
//!
//! Each numeric field is drawn uniformly from a fixed design range; enum
//! fields are drawn uniformly from their variants. Draw order is fixed
//! (temperature, humidity, activity, feeding, water, battery, signal) and
//! only absent draft fields consume draws, so a scripted `RandomSource`
//! maps to predictable fields.

use chrono::{DateTime, Utc};

use crate::model::{
    FeedingStatus, GeoPoint, ReadingDraft, ReadingId, SensorReading, SignalStrength,
};
use crate::source::RandomSource;

/// Closed design range of a numeric sensor field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRange {
    pub min: f64,
    pub max: f64,
}

impl SensorRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    pub fn sample(&self, rng: &dyn RandomSource) -> f64 {
        rng.uniform(self.min, self.max)
    }
}

pub const TEMPERATURE_C: SensorRange = SensorRange::new(37.0, 40.0);
pub const HUMIDITY_PCT: SensorRange = SensorRange::new(50.0, 80.0);
pub const ACTIVITY_PCT: SensorRange = SensorRange::new(60.0, 100.0);
pub const WATER_PCT: SensorRange = SensorRange::new(30.0, 100.0);
pub const BATTERY_PCT: SensorRange = SensorRange::new(80.0, 100.0);

/// Collar position reported by every synthesized reading.
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint {
    lat: 30.7333,
    lng: 76.7794,
};

/// Build a reading from a draft, drawing every absent field.
pub fn complete(
    rng: &dyn RandomSource,
    id: ReadingId,
    animal_id: &str,
    timestamp: DateTime<Utc>,
    draft: ReadingDraft,
) -> SensorReading {
    let temperature = draft.temperature.unwrap_or_else(|| TEMPERATURE_C.sample(rng));
    let humidity = draft.humidity.unwrap_or_else(|| HUMIDITY_PCT.sample(rng));
    let activity_level = draft.activity_level.unwrap_or_else(|| ACTIVITY_PCT.sample(rng));
    let feeding_status = draft
        .feeding_status
        .unwrap_or_else(|| FeedingStatus::ALL[rng.pick_index(FeedingStatus::ALL.len())]);
    let water_level = draft.water_level.unwrap_or_else(|| WATER_PCT.sample(rng));
    let battery_level = draft.battery_level.unwrap_or_else(|| BATTERY_PCT.sample(rng));
    let signal_strength = draft
        .signal_strength
        .unwrap_or_else(|| SignalStrength::ALL[rng.pick_index(SignalStrength::ALL.len())]);

    SensorReading {
        id,
        animal_id: animal_id.to_string(),
        timestamp,
        temperature,
        humidity,
        activity_level,
        feeding_status,
        water_level,
        location: draft.location.unwrap_or(DEFAULT_LOCATION),
        battery_level,
        signal_strength,
    }
}

/// Fully synthetic reading.
pub fn synthesize(
    rng: &dyn RandomSource,
    id: ReadingId,
    animal_id: &str,
    timestamp: DateTime<Utc>,
) -> SensorReading {
    complete(rng, id, animal_id, timestamp, ReadingDraft::default())
}

/// True when every numeric field sits inside its design range.
pub fn within_design_ranges(r: &SensorReading) -> bool {
    TEMPERATURE_C.contains(r.temperature)
        && HUMIDITY_PCT.contains(r.humidity)
        && ACTIVITY_PCT.contains(r.activity_level)
        && WATER_PCT.contains(r.water_level)
        && BATTERY_PCT.contains(r.battery_level)
}
