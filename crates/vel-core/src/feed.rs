//! Console feed: the seeded boot transcript followed by generated lines.

use rand::Rng;
use tracing::debug;

use crate::clock::Clock;
use crate::entry::{LogCategory, LogEntry};
use crate::script::{seed_entries, MESSAGE_POOL};

/// Pick one of the generated categories uniformly.
pub fn sample_category<R: Rng + ?Sized>(rng: &mut R) -> LogCategory {
    LogCategory::GENERATED[rng.random_range(0..LogCategory::GENERATED.len())]
}

/// Pick one pool message uniformly.
pub fn sample_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MESSAGE_POOL[rng.random_range(0..MESSAGE_POOL.len())]
}

/// Build a generated entry with the given id and timestamp.
pub fn generate_entry<R: Rng + ?Sized>(id: u64, timestamp: String, rng: &mut R) -> LogEntry {
    let category = sample_category(rng);
    let message = sample_message(rng);
    LogEntry::new(id, timestamp, category, message)
}

/// Append-only log of console entries.
#[derive(Debug, Clone, Default)]
pub struct FeedSimulator {
    entries: Vec<LogEntry>,
    last_id: u64,
    seeded: bool,
}

impl FeedSimulator {
    /// Empty, unseeded feed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed already holding the boot transcript.
    pub fn seeded() -> Self {
        let mut feed = Self::new();
        feed.seed();
        feed
    }

    /// Load the boot transcript into an empty feed. Later calls, or calls
    /// after a tick, do nothing; returns whether entries were added.
    pub fn seed(&mut self) -> bool {
        if !self.entries.is_empty() {
            return false;
        }
        self.seeded = true;
        for entry in seed_entries() {
            self.append(entry);
        }
        debug!(entries = self.entries.len(), "feed seeded");
        true
    }

    /// Append one generated entry stamped with the clock's current time.
    pub fn tick<R, C>(&mut self, rng: &mut R, clock: &C) -> &LogEntry
    where
        R: Rng + ?Sized,
        C: Clock + ?Sized,
    {
        let id = self.last_id.saturating_add(1);
        let entry = generate_entry(id, clock.timestamp(), rng);
        debug!(id, category = entry.category.as_str(), "feed tick");
        self.append(entry);
        &self.entries[self.entries.len() - 1]
    }

    fn append(&mut self, entry: LogEntry) {
        self.last_id = self.last_id.max(entry.id);
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The most recent `count` entries, oldest first.
    pub fn tail(&self, count: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Largest id issued so far, 0 when empty.
    pub const fn last_id(&self) -> u64 {
        self.last_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }
}
