//! Fixed-period interval timer driven by elapsed milliseconds.

/// Counts whole periods of `interval_ms` as time is fed to [`Timer::advance`].
///
/// A timer does nothing until started. Stopping it discards the partial
/// period, so a restart waits a full interval before the next fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    interval_ms: u64,
    /// Time accumulated toward the next fire.
    elapsed_ms: u64,
    running: bool,
    tick_count: u64,
}

impl Timer {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            running: false,
            tick_count: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed_ms = 0;
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.tick_count = 0;
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Total number of fires since creation or the last reset.
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance by `delta_ms` and return how many periods completed. The
    /// remainder carries into the next call.
    pub fn advance(&mut self, delta_ms: u64) -> u64 {
        if !self.running || self.interval_ms == 0 {
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        let ticks = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        self.tick_count = self.tick_count.saturating_add(ticks);
        ticks
    }

    /// Milliseconds until the next fire, `None` when stopped.
    pub const fn remaining_ms(&self) -> Option<u64> {
        if self.running && self.interval_ms > 0 {
            Some(self.interval_ms - self.elapsed_ms)
        } else {
            None
        }
    }

    /// Fraction of the current period already elapsed (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        if self.interval_ms == 0 {
            0.0
        } else {
            self.elapsed_ms as f32 / self.interval_ms as f32
        }
    }
}
