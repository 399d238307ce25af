use std::collections::VecDeque;

use crate::model::SensorReading;

/// A reading plus its global insertion sequence.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub seq: u64,
    pub reading: SensorReading,
}

/// One animal's readings, oldest first, never longer than `cap`.
#[derive(Debug)]
pub(crate) struct AnimalLog {
    entries: VecDeque<Entry>,
    cap: usize,
}

impl AnimalLog {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap: cap.max(1),
        }
    }

    /// Append and trim from the front. Returns how many entries were evicted.
    pub fn push(&mut self, entry: Entry) -> usize {
        self.entries.push_back(entry);
        let mut evicted = 0;
        while self.entries.len() > self.cap {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    pub fn first_mut(&mut self) -> Option<&mut Entry> {
        self.entries.front_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
