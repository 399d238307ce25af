//! Deterministic sources for tests and fixtures.

use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::clock::Clock;
use super::random::RandomSource;

/// Mock random source that produces a reproducible, well-mixed sequence.
#[derive(Debug, Clone)]
pub struct MockRandom {
    counter: Arc<AtomicU64>,
    seed: u64,
}

impl MockRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(0)),
            seed,
        }
    }

    pub fn default_seed() -> Self {
        Self::new(0x1234_5678_9ABC_DEF0)
    }

    /// Rewind so the same sequence is produced again.
    pub fn reset(&self) {
        self.counter.store(0, Ordering::SeqCst);
    }

    /// Number of values drawn so far.
    pub fn counter(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    const fn mix(&self, counter: u64) -> u64 {
        let mut x = self.seed.wrapping_add(counter);
        x = x.wrapping_mul(0x517C_C1B7_2722_0A95);
        x ^= x >> 32;
        x = x.wrapping_mul(0x517C_C1B7_2722_0A95);
        x ^= x >> 32;
        x
    }
}

impl Default for MockRandom {
    fn default() -> Self {
        Self::default_seed()
    }
}

impl RandomSource for MockRandom {
    fn next_u64(&self) -> u64 {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.mix(n)
    }
}

/// Random source that replays a fixed script of values, cycling at the end.
///
/// Useful to pin synthesized fields to exact range boundaries.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Arc<Vec<u64>>,
    cursor: Arc<AtomicUsize>,
}

impl ScriptedRandom {
    pub fn new(values: Vec<u64>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self {
            values: Arc::new(values),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Script expressed as unit floats; each is clamped into `[0, 1)`.
    pub fn from_units(units: &[f64]) -> Self {
        const SCALE: f64 = (1u64 << 53) as f64;
        let values = units
            .iter()
            .map(|u| {
                let bits = (u.clamp(0.0, 1.0) * SCALE) as u64;
                bits.min((1u64 << 53) - 1) << 11
            })
            .collect();
        Self::new(values)
    }

    /// Same unit value for every draw.
    pub fn constant(unit: f64) -> Self {
        Self::from_units(&[unit])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u64(&self) -> u64 {
        let i = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.values[i % self.values.len()]
    }
}

/// Controllable clock. Optionally advances by a fixed step on every read so
/// consecutive readings get distinct timestamps.
#[derive(Debug, Clone)]
pub struct MockClock {
    millis: Arc<AtomicI64>,
    step_millis: i64,
}

impl MockClock {
    /// Frozen clock.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::ticking(start, Duration::zero())
    }

    /// Clock that returns `start`, `start + step`, `start + 2*step`, ...
    pub fn ticking(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
            step_millis: step.num_milliseconds(),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.millis.store(at.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        let ms = self.millis.fetch_add(self.step_millis, Ordering::SeqCst);
        DateTime::from_timestamp_millis(ms).unwrap_or_default()
    }
}
