use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};

use crate::error::{HerdError, Result};
use crate::model::{ReadingDraft, ReadingId, SensorReading};
use crate::source::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::synth;

use super::animal_log::{AnimalLog, Entry};
use super::{MAX_HISTORY_HOURS, RETENTION_CAP};

/// Result of `MetricsStore::query`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    /// Newest first, at most `limit` long.
    pub readings: Vec<SensorReading>,
    /// Readings matching the filter before truncation.
    pub matched: usize,
}

/// Point-in-time counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub animals: usize,
    pub readings: usize,
    /// Readings appended since start (or since `clear`).
    pub appended: u64,
    /// Readings dropped by the retention cap.
    pub evicted: u64,
}

#[derive(Default)]
struct StoreInner {
    animals: HashMap<String, AnimalLog>,
    next_seq: u64,
    appended: u64,
    evicted: u64,
}

/// In-memory store of sensor readings keyed by animal id.
///
/// Every operation holds one mutex for its whole duration, so append,
/// refresh and eviction are atomic with respect to each other. Nothing
/// awaits or blocks while the lock is held.
pub struct MetricsStore {
    inner: Mutex<StoreInner>,
    rng: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsStore {
    /// Store backed by the thread RNG and the system clock.
    pub fn new() -> Self {
        Self::with_sources(Arc::new(ThreadRandom::new()), Arc::new(SystemClock::new()))
    }

    pub fn with_sources(rng: Arc<dyn RandomSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
            rng,
            clock,
        }
    }

    /// Current instant according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>> {
        // Poisoned lock means a logic bug elsewhere; report instead of panicking.
        self.inner
            .lock()
            .map_err(|_| HerdError::Internal("metrics store lock poisoned".into()))
    }

    /// Record a reading. Absent draft fields are synthesized, the id is
    /// always freshly assigned, and the animal's log is trimmed to
    /// `RETENTION_CAP`.
    pub fn append(&self, animal_id: &str, draft: ReadingDraft) -> Result<SensorReading> {
        require_animal_id(animal_id)?;

        let mut inner = self.lock()?;
        let id = ReadingId::from_random_bytes(self.rng.random_bytes_16());
        let timestamp = draft.timestamp.unwrap_or_else(|| self.clock.now());
        let synthesized = draft.is_empty();
        let reading = synth::complete(self.rng.as_ref(), id, animal_id, timestamp, draft);

        let seq = inner.next_seq;
        inner.next_seq += 1;
        let evicted = inner
            .animals
            .entry(animal_id.to_string())
            .or_insert_with(|| AnimalLog::new(RETENTION_CAP))
            .push(Entry {
                seq,
                reading: reading.clone(),
            });
        inner.appended += 1;
        inner.evicted += evicted as u64;

        tracing::trace!(animal_id, id = %reading.id, synthesized, "reading appended");
        if evicted > 0 {
            tracing::debug!(animal_id, evicted, cap = RETENTION_CAP, "retention cap reached, evicted oldest");
        }
        Ok(reading)
    }

    /// Append a fully synthetic reading.
    pub fn simulate(&self, animal_id: &str) -> Result<SensorReading> {
        self.append(animal_id, ReadingDraft::default())
    }

    /// Readings newest first, optionally for one animal, truncated to `limit`.
    ///
    /// Sorting is stable on timestamp over insertion order.
    pub fn query(&self, animal_id: Option<&str>, limit: usize) -> Result<QueryPage> {
        let inner = self.lock()?;
        let mut hits: Vec<&Entry> = match animal_id {
            Some(id) => inner
                .animals
                .get(id)
                .map(|log| log.iter().collect())
                .unwrap_or_default(),
            None => inner.animals.values().flat_map(|log| log.iter()).collect(),
        };
        hits.sort_by_key(|e| e.seq);
        hits.sort_by(|a, b| b.reading.timestamp.cmp(&a.reading.timestamp));

        let matched = hits.len();
        let readings = hits
            .into_iter()
            .take(limit)
            .map(|e| e.reading.clone())
            .collect();
        Ok(QueryPage { readings, matched })
    }

    /// Resynthesize the animal's first (oldest retained) reading in place,
    /// keeping its id. `None` when the animal has no readings; nothing is
    /// created in that case.
    pub fn refresh(&self, animal_id: &str) -> Result<Option<SensorReading>> {
        require_animal_id(animal_id)?;

        let mut inner = self.lock()?;
        let Some(entry) = inner.animals.get_mut(animal_id).and_then(|log| log.first_mut()) else {
            tracing::debug!(animal_id, "refresh skipped, no readings");
            return Ok(None);
        };

        let id = entry.reading.id;
        entry.reading = synth::synthesize(self.rng.as_ref(), id, animal_id, self.clock.now());
        tracing::debug!(animal_id, id = %id, "reading refreshed");
        Ok(Some(entry.reading.clone()))
    }

    /// Newest reading for one animal.
    pub fn latest(&self, animal_id: &str) -> Result<Option<SensorReading>> {
        let inner = self.lock()?;
        Ok(inner.animals.get(animal_id).and_then(|log| {
            log.iter()
                .max_by(|a, b| {
                    a.reading
                        .timestamp
                        .cmp(&b.reading.timestamp)
                        .then(a.seq.cmp(&b.seq))
                })
                .map(|e| e.reading.clone())
        }))
    }

    /// Readings for one animal recorded within the last `hours`, newest first.
    pub fn history(&self, animal_id: &str, hours: u32) -> Result<Vec<SensorReading>> {
        if !(1..=MAX_HISTORY_HOURS).contains(&hours) {
            return Err(HerdError::BadRequest(format!(
                "hours must be between 1 and {MAX_HISTORY_HOURS}"
            )));
        }

        let inner = self.lock()?;
        let end = self.clock.now();
        let start = end - Duration::hours(i64::from(hours));

        let mut hits: Vec<&Entry> = inner
            .animals
            .get(animal_id)
            .map(|log| {
                log.iter()
                    .filter(|e| e.reading.timestamp >= start && e.reading.timestamp <= end)
                    .collect()
            })
            .unwrap_or_default();
        hits.sort_by(|a, b| b.reading.timestamp.cmp(&a.reading.timestamp));
        Ok(hits.into_iter().map(|e| e.reading.clone()).collect())
    }

    /// One animal's retained readings in insertion order.
    pub fn readings_for(&self, animal_id: &str) -> Result<Vec<SensorReading>> {
        let inner = self.lock()?;
        Ok(inner
            .animals
            .get(animal_id)
            .map(|log| log.iter().map(|e| e.reading.clone()).collect())
            .unwrap_or_default())
    }

    /// Drop every reading and reset counters.
    pub fn clear(&self) -> Result<()> {
        let mut inner = self.lock()?;
        *inner = StoreInner::default();
        Ok(())
    }

    pub fn stats(&self) -> Result<StoreStats> {
        let inner = self.lock()?;
        Ok(StoreStats {
            animals: inner.animals.len(),
            readings: inner.animals.values().map(AnimalLog::len).sum(),
            appended: inner.appended,
            evicted: inner.evicted,
        })
    }
}

fn require_animal_id(animal_id: &str) -> Result<()> {
    if animal_id.trim().is_empty() {
        return Err(HerdError::BadRequest("animal_id is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeedingStatus;
    use crate::source::{MockClock, MockRandom};


    fn store() -> (MetricsStore, MockClock) {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        let clock = MockClock::ticking(start, Duration::seconds(1));
        let store = MetricsStore::with_sources(Arc::new(MockRandom::new(1)), Arc::new(clock.clone()));
        (store, clock)
    }

    #[test]
    fn empty_animal_id_is_rejected_before_insert() {
        let (s, _) = store();
        for bad in ["", "   "] {
            let err = s.append(bad, ReadingDraft::default()).err();
            assert!(matches!(err, Some(HerdError::BadRequest(_))));
        }
        assert_eq!(s.stats().ok().map(|st| st.readings), Some(0));
    }

    #[test]
    fn draft_values_are_not_range_checked() {
        let (s, _) = store();
        let draft = ReadingDraft {
            temperature: Some(55.0),
            feeding_status: Some(FeedingStatus::Hungry),
            ..ReadingDraft::default()
        };
        let r = s.append("A", draft).ok();
        assert_eq!(r.as_ref().map(|r| r.temperature), Some(55.0));
        assert_eq!(r.map(|r| r.feeding_status), Some(FeedingStatus::Hungry));
    }

    #[test]
    fn refresh_on_missing_animal_changes_nothing() {
        let (s, _) = store();
        assert!(s.append("A", ReadingDraft::default()).is_ok());
        let before = s.readings_for("A").ok();

        assert_eq!(s.refresh("ghost").ok(), Some(None));
        assert_eq!(s.readings_for("A").ok(), before);
        assert_eq!(s.stats().ok().map(|st| (st.animals, st.readings)), Some((1, 1)));
    }

    #[test]
    fn latest_prefers_newest_timestamp() {
        let (s, _) = store();
        let _ = s.append("A", ReadingDraft::default());
        let last = s.append("A", ReadingDraft::default()).ok();
        assert_eq!(s.latest("A").ok().flatten(), last);
        assert_eq!(s.latest("B").ok(), Some(None));
    }

    #[test]
    fn history_rejects_out_of_range_window() {
        let (s, _) = store();
        assert!(matches!(s.history("A", 0), Err(HerdError::BadRequest(_))));
        assert!(matches!(s.history("A", 169), Err(HerdError::BadRequest(_))));
        assert_eq!(s.history("A", 168).ok().map(|v| v.len()), Some(0));
    }

    #[test]
    fn clear_resets_everything() {
        let (s, _) = store();
        let _ = s.simulate("A");
        let _ = s.simulate("B");
        assert!(s.clear().is_ok());
        assert_eq!(s.stats().ok(), Some(StoreStats::default()));
        assert_eq!(s.query(None, 10).ok().map(|p| p.matched), Some(0));
    }
}
