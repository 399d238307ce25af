//! Metrics store behavioral contract.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use herdwatch_core::source::{MockClock, MockRandom};
use herdwatch_core::synth;
use herdwatch_core::{MetricsStore, ReadingDraft, RETENTION_CAP};

fn start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn store_with(clock: MockClock) -> MetricsStore {
    MetricsStore::with_sources(Arc::new(MockRandom::default_seed()), Arc::new(clock))
}

fn ticking_store() -> (MetricsStore, MockClock) {
    let clock = MockClock::ticking(start(), Duration::seconds(1));
    (store_with(clock.clone()), clock)
}

#[test]
fn retains_exactly_the_last_hundred_in_insertion_order() {
    let (store, _) = ticking_store();
    let ids: Vec<_> = (0..150)
        .map(|_| store.simulate("cow-7").unwrap().id)
        .collect();

    let kept: Vec<_> = store
        .readings_for("cow-7")
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(kept.len(), RETENTION_CAP);
    assert_eq!(kept, ids[50..].to_vec());

    let stats = store.stats().unwrap();
    assert_eq!(stats.appended, 150);
    assert_eq!(stats.evicted, 50);
}

#[test]
fn eviction_is_per_animal() {
    let (store, _) = ticking_store();
    let other = store.simulate("goat-1").unwrap();
    for _ in 0..(RETENTION_CAP + 5) {
        store.simulate("cow-7").unwrap();
    }

    assert_eq!(store.readings_for("goat-1").unwrap(), vec![other]);
    assert_eq!(store.readings_for("cow-7").unwrap().len(), RETENTION_CAP);
    assert_eq!(store.stats().unwrap().readings, RETENTION_CAP + 1);
}

#[test]
fn query_returns_two_most_recent_newest_first() {
    let (store, _) = ticking_store();
    let a: Vec<_> = (0..3).map(|_| store.simulate("A").unwrap()).collect();

    let page = store.query(Some("A"), 2).unwrap();
    assert_eq!(page.matched, 3);
    assert_eq!(page.readings, vec![a[2].clone(), a[1].clone()]);
}

#[test]
fn query_without_filter_spans_animals_and_honors_limit() {
    let (store, _) = ticking_store();
    for i in 0..12 {
        store.simulate(if i % 2 == 0 { "A" } else { "B" }).unwrap();
    }

    for limit in [0, 1, 5, 12, 50] {
        let page = store.query(None, limit).unwrap();
        assert_eq!(page.matched, 12);
        assert_eq!(page.readings.len(), limit.min(12));
        assert!(page
            .readings
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));
    }
}

#[test]
fn query_orders_by_timestamp_not_insertion() {
    let (store, _) = ticking_store();
    let old = ReadingDraft {
        timestamp: Some(start() - Duration::days(1)),
        ..ReadingDraft::default()
    };
    let backfilled = store.append("A", old).unwrap();
    let fresh = store.simulate("A").unwrap();

    let page = store.query(Some("A"), 10).unwrap();
    assert_eq!(page.readings, vec![fresh, backfilled]);
}

#[test]
fn equal_timestamps_keep_insertion_order() {
    let store = store_with(MockClock::new(start()));
    let first = store.simulate("A").unwrap();
    let second = store.simulate("A").unwrap();

    let page = store.query(Some("A"), 10).unwrap();
    assert_eq!(page.readings, vec![first, second]);
}

#[test]
fn refresh_keeps_id_and_rewrites_the_rest() {
    let (store, _) = ticking_store();
    let first = store.simulate("A").unwrap();
    let second = store.simulate("A").unwrap();

    let refreshed = store.refresh("A").unwrap().expect("animal has readings");
    assert_eq!(refreshed.id, first.id);
    assert_eq!(refreshed.animal_id, "A");
    assert!(refreshed.timestamp > second.timestamp);
    assert_ne!(refreshed.temperature, first.temperature);
    assert_ne!(refreshed.humidity, first.humidity);
    assert_ne!(refreshed.activity_level, first.activity_level);
    assert_ne!(refreshed.water_level, first.water_level);
    assert_ne!(refreshed.battery_level, first.battery_level);
    assert!(synth::within_design_ranges(&refreshed));

    // Refreshed in place: still first in insertion order, nothing added.
    let kept = store.readings_for("A").unwrap();
    assert_eq!(kept, vec![refreshed.clone(), second]);
    assert_eq!(store.latest("A").unwrap(), Some(refreshed));
}

#[test]
fn append_with_only_animal_id_synthesizes_in_range() {
    let (store, _) = ticking_store();
    for _ in 0..200 {
        let r = store.append("A", ReadingDraft::default()).unwrap();
        assert!(synth::within_design_ranges(&r), "{r:?}");
        assert_eq!(r.location, synth::DEFAULT_LOCATION);
    }
}

#[test]
fn ids_are_unique() {
    let (store, _) = ticking_store();
    let mut ids: Vec<_> = (0..RETENTION_CAP)
        .map(|_| store.simulate("A").unwrap().id)
        .collect();
    ids.sort_by_key(|id| *id.as_uuid());
    ids.dedup();
    assert_eq!(ids.len(), RETENTION_CAP);
}

#[test]
fn history_covers_only_the_window() {
    let clock = MockClock::new(start());
    let store = store_with(clock.clone());

    let stale = store.simulate("A").unwrap();
    clock.advance(Duration::hours(30));
    let recent = store.simulate("A").unwrap();
    clock.advance(Duration::hours(1));

    assert_eq!(store.history("A", 24).unwrap(), vec![recent.clone()]);
    assert_eq!(store.history("A", 48).unwrap(), vec![recent, stale]);
}

#[test]
fn concurrent_appends_respect_the_cap() {
    let store = Arc::new(MetricsStore::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    store.simulate("herd").unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let stats = store.stats().unwrap();
    assert_eq!(stats.appended, 400);
    assert_eq!(stats.readings, RETENTION_CAP);
    assert_eq!(stats.evicted, 300);
}
