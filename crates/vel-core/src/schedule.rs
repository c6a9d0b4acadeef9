//! The three interval timers behind the console: feed, stats and cursor.

use serde::{Deserialize, Serialize};

use crate::timer::Timer;

/// Which timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Feed,
    Stats,
    Cursor,
}

impl TimerKind {
    /// Firing order within one `advance` call.
    pub const ALL: [Self; 3] = [Self::Feed, Self::Stats, Self::Cursor];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Stats => "stats",
            Self::Cursor => "cursor",
        }
    }
}

/// Timer periods in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Periods {
    pub feed_ms: u64,
    pub stats_ms: u64,
    pub cursor_ms: u64,
}

impl Periods {
    pub const DEFAULT_FEED_MS: u64 = 8_000;
    pub const DEFAULT_STATS_MS: u64 = 5_000;
    pub const DEFAULT_CURSOR_MS: u64 = 530;

    pub const fn of(&self, kind: TimerKind) -> u64 {
        match kind {
            TimerKind::Feed => self.feed_ms,
            TimerKind::Stats => self.stats_ms,
            TimerKind::Cursor => self.cursor_ms,
        }
    }
}

impl Default for Periods {
    fn default() -> Self {
        Self {
            feed_ms: Self::DEFAULT_FEED_MS,
            stats_ms: Self::DEFAULT_STATS_MS,
            cursor_ms: Self::DEFAULT_CURSOR_MS,
        }
    }
}

/// Fires reported by one [`Schedule::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fired {
    pub feed: u64,
    pub stats: u64,
    pub cursor: u64,
}

impl Fired {
    pub const fn count(&self, kind: TimerKind) -> u64 {
        match kind {
            TimerKind::Feed => self.feed,
            TimerKind::Stats => self.stats,
            TimerKind::Cursor => self.cursor,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.feed == 0 && self.stats == 0 && self.cursor == 0
    }
}

/// Feed, stats and cursor timers started and stopped together.
#[derive(Debug, Clone)]
pub struct Schedule {
    feed: Timer,
    stats: Timer,
    cursor: Timer,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(Periods::default())
    }
}

impl Schedule {
    pub const fn new(periods: Periods) -> Self {
        Self {
            feed: Timer::new(periods.feed_ms),
            stats: Timer::new(periods.stats_ms),
            cursor: Timer::new(periods.cursor_ms),
        }
    }

    pub fn start(&mut self) {
        self.feed.start();
        self.stats.start();
        self.cursor.start();
    }

    pub fn stop(&mut self) {
        self.feed.stop();
        self.stats.stop();
        self.cursor.stop();
    }

    pub const fn is_running(&self) -> bool {
        self.feed.is_running() || self.stats.is_running() || self.cursor.is_running()
    }

    pub const fn timer(&self, kind: TimerKind) -> &Timer {
        match kind {
            TimerKind::Feed => &self.feed,
            TimerKind::Stats => &self.stats,
            TimerKind::Cursor => &self.cursor,
        }
    }

    /// Advance every timer by `delta_ms`.
    pub fn advance(&mut self, delta_ms: u64) -> Fired {
        Fired {
            feed: self.feed.advance(delta_ms),
            stats: self.stats.advance(delta_ms),
            cursor: self.cursor.advance(delta_ms),
        }
    }

    /// Milliseconds until the soonest running timer fires.
    pub fn until_next_ms(&self) -> Option<u64> {
        TimerKind::ALL
            .iter()
            .filter_map(|&kind| self.timer(kind).remaining_ms())
            .min()
    }
}
