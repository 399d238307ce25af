//! JSON wire vectors for readings and drafts.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use herdwatch_core::{FeedingStatus, ReadingDraft, SensorReading, SignalStrength};

fn load(name: &str) -> String {
    fs::read_to_string(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn parse_reading_full() {
    let s = load("reading_full.json");
    let r: SensorReading = serde_json::from_str(&s).unwrap();
    assert_eq!(r.animal_id, "1");
    assert_eq!(r.id.to_string(), "6f1c2d4e-8a3b-4c5d-9e7f-0a1b2c3d4e5f");
    assert_eq!(r.temperature, 38.5);
    assert_eq!(r.feeding_status, FeedingStatus::Fed);
    assert_eq!(r.signal_strength, SignalStrength::Strong);
    assert_eq!(r.location.lat, 30.7333);
}

#[test]
fn reading_serializes_snake_case_wire_names() {
    let r: SensorReading = serde_json::from_str(&load("reading_full.json")).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    for key in [
        "id",
        "animal_id",
        "timestamp",
        "temperature",
        "humidity",
        "activity_level",
        "feeding_status",
        "water_level",
        "location",
        "battery_level",
        "signal_strength",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }
    assert_eq!(v["feeding_status"], "fed");
    assert_eq!(v["timestamp"], "2024-03-01T08:30:00Z");
}

#[test]
fn parse_draft_partial() {
    let d: ReadingDraft = serde_json::from_str(&load("draft_partial.json")).unwrap();
    assert_eq!(d.temperature, Some(39.1));
    assert_eq!(d.feeding_status, Some(FeedingStatus::Hungry));
    assert!(d.humidity.is_none());
    assert!(d.timestamp.is_none());
    assert!(!d.is_empty());
}

#[test]
fn unknown_enum_value_is_rejected() {
    let s = load("reading_bad_signal.json");
    assert!(serde_json::from_str::<SensorReading>(&s).is_err());
}
