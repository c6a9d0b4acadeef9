//! Drifting console counters.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const INTEGRITY_MIN: f64 = 0.0;
pub const INTEGRITY_MAX: f64 = 99.9;
/// Largest absolute integrity change per tick.
pub const INTEGRITY_JITTER: f64 = 0.1;
pub const THREADS_MIN: u8 = 3;
pub const THREADS_MAX: u8 = 12;
/// Inclusive upper bound of the per-tick fragment increment.
pub const FRAGMENT_STEP_MAX: u64 = 9;
/// Inclusive upper bound of the per-tick archive increment.
pub const ARCHIVE_STEP_MAX: u64 = 49;

/// The four counters shown above the console.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub recovered_fragments: u64,
    pub scanned_archives: u64,
    pub integrity_percent: f64,
    pub active_threads: u8,
}

impl Default for StatsSnapshot {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl StatsSnapshot {
    pub const INITIAL: Self = Self {
        recovered_fragments: 2847,
        scanned_archives: 14203,
        integrity_percent: 98.4,
        active_threads: 7,
    };

    /// Build a snapshot, clamping integrity and threads into range.
    pub fn new(
        recovered_fragments: u64,
        scanned_archives: u64,
        integrity_percent: f64,
        active_threads: u8,
    ) -> Self {
        Self {
            recovered_fragments,
            scanned_archives,
            integrity_percent: clamp_integrity(integrity_percent),
            active_threads: active_threads.clamp(THREADS_MIN, THREADS_MAX),
        }
    }

    /// Drift every counter by one step.
    pub fn next<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let fragments = rng.random_range(0..=FRAGMENT_STEP_MAX);
        let archives = rng.random_range(0..=ARCHIVE_STEP_MAX);
        let jitter = rng.random_range(-INTEGRITY_JITTER..INTEGRITY_JITTER);
        let threads = if rng.random_bool(0.5) {
            self.active_threads.saturating_add(1)
        } else {
            self.active_threads.saturating_sub(1)
        };

        Self {
            recovered_fragments: self.recovered_fragments.saturating_add(fragments),
            scanned_archives: self.scanned_archives.saturating_add(archives),
            integrity_percent: clamp_integrity(self.integrity_percent + jitter),
            active_threads: threads.clamp(THREADS_MIN, THREADS_MAX),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        (INTEGRITY_MIN..=INTEGRITY_MAX).contains(&self.integrity_percent)
            && (THREADS_MIN..=THREADS_MAX).contains(&self.active_threads)
    }

    /// `98.4%`
    pub fn integrity_label(&self) -> String {
        format!("{:.1}%", self.integrity_percent)
    }

    /// `7 threads`
    pub fn threads_label(&self) -> String {
        format!("{} threads", self.active_threads)
    }

    pub fn fragments_label(&self) -> String {
        format_thousands(self.recovered_fragments)
    }

    pub fn archives_label(&self) -> String {
        format_thousands(self.scanned_archives)
    }
}

fn clamp_integrity(value: f64) -> f64 {
    if value.is_nan() {
        return INTEGRITY_MIN;
    }
    value.clamp(INTEGRITY_MIN, INTEGRITY_MAX)
}

/// Group digits in threes with commas: `14203` becomes `14,203`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
