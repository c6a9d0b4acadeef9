//! The archive model: feed, stats, view state and their timers in one owner.

use std::time::Duration;

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;
use tracing::{debug, info};

use crate::clock::{Clock, LocalClock};
use crate::entry::LogEntry;
use crate::feed::FeedSimulator;
use crate::schedule::{Fired, Periods, Schedule};
use crate::stats::StatsSnapshot;
use crate::view::{Section, ViewMessage, ViewState};

/// Every transition the archive accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    View(ViewMessage),
    FeedTick,
    StatsTick,
}

impl From<ViewMessage> for Message {
    fn from(msg: ViewMessage) -> Self {
        Self::View(msg)
    }
}

/// Owns all mutable console state.
///
/// The feed is seeded on construction. Timers only run between
/// [`Archive::mount`] and [`Archive::unmount`]; outside that window
/// [`Archive::advance`] is inert.
#[derive(Debug)]
pub struct Archive<R = Pcg64, C = LocalClock> {
    feed: FeedSimulator,
    stats: StatsSnapshot,
    view: ViewState,
    schedule: Schedule,
    /// Sub-millisecond time not yet handed to the schedule.
    pending: Duration,
    rng: R,
    clock: C,
}

impl Archive {
    /// Archive on local time. With `seed` the generated feed and stats
    /// drift are reproducible.
    pub fn new(periods: Periods, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_rng(&mut rand::rng()),
        };
        Self::with_parts(periods, rng, LocalClock)
    }
}

impl<R: RngCore, C: Clock> Archive<R, C> {
    pub fn with_parts(periods: Periods, rng: R, clock: C) -> Self {
        Self {
            feed: FeedSimulator::seeded(),
            stats: StatsSnapshot::INITIAL,
            view: ViewState::default(),
            schedule: Schedule::new(periods),
            pending: Duration::ZERO,
            rng,
            clock,
        }
    }

    /// Start on `section` instead of the console.
    pub fn with_section(mut self, section: Section) -> Self {
        self.view.select_section(section);
        self
    }

    /// Start the feed, stats and cursor timers.
    pub fn mount(&mut self) {
        self.schedule.start();
        self.pending = Duration::ZERO;
        info!(entries = self.feed.len(), "archive mounted");
    }

    /// Cancel all timers.
    pub fn unmount(&mut self) {
        self.schedule.stop();
        info!(entries = self.feed.len(), "archive unmounted");
    }

    pub const fn is_mounted(&self) -> bool {
        self.schedule.is_running()
    }

    /// Feed elapsed wall time to the timers and apply every due transition,
    /// feed first, then stats, then cursor.
    pub fn advance(&mut self, elapsed: Duration) -> Fired {
        if !self.is_mounted() {
            return Fired::default();
        }
        self.pending += elapsed;
        let whole_ms = u64::try_from(self.pending.as_millis()).unwrap_or(u64::MAX);
        self.pending = self
            .pending
            .saturating_sub(Duration::from_millis(whole_ms));

        let fired = self.schedule.advance(whole_ms);
        for _ in 0..fired.feed {
            self.tick();
        }
        for _ in 0..fired.stats {
            self.tick_stats();
        }
        for _ in 0..fired.cursor {
            self.view.cursor_blink();
        }
        fired
    }

    /// Time until the next timer is due, `None` while unmounted.
    pub fn until_next_timer(&self) -> Option<Duration> {
        self.schedule
            .until_next_ms()
            .map(|ms| Duration::from_millis(ms).saturating_sub(self.pending))
    }

    pub fn update(&mut self, msg: impl Into<Message>) {
        match msg.into() {
            Message::View(msg) => self.view.update(msg),
            Message::FeedTick => {
                self.tick();
            }
            Message::StatsTick => {
                self.tick_stats();
            }
        }
    }

    /// Append one generated entry.
    pub fn tick(&mut self) -> &LogEntry {
        self.feed.tick(&mut self.rng, &self.clock)
    }

    /// Replace the stats snapshot with its next drift step.
    pub fn tick_stats(&mut self) -> StatsSnapshot {
        self.stats = self.stats.next(&mut self.rng);
        debug!(
            fragments = self.stats.recovered_fragments,
            archives = self.stats.scanned_archives,
            integrity = self.stats.integrity_percent,
            threads = self.stats.active_threads,
            "stats tick"
        );
        self.stats
    }

    pub fn select_section(&mut self, section: Section) {
        self.view.select_section(section);
    }

    pub fn toggle_faq(&mut self, id: u32) {
        self.view.toggle_faq(id);
    }

    pub fn cursor_blink(&mut self) {
        self.view.cursor_blink();
    }

    pub const fn feed(&self) -> &FeedSimulator {
        &self.feed
    }

    pub fn entries(&self) -> &[LogEntry] {
        self.feed.entries()
    }

    pub const fn stats(&self) -> &StatsSnapshot {
        &self.stats
    }

    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub const fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
