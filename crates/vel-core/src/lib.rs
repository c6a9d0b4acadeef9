//! Core model for the VEL archival console.
//!
//! This crate holds everything that is independent of the terminal:
//! - Feed simulation: [`FeedSimulator`] seeded with a fixed boot transcript,
//!   then extended by generated [`LogEntry`] lines
//! - Counter drift: [`StatsSnapshot::next`]
//! - View state: [`ViewState`] with Elm-style [`ViewMessage`] transitions
//! - Timing: [`Timer`] and the three-timer [`Schedule`]
//! - [`Archive`], which owns all of the above plus the RNG and [`Clock`]
//!
//! ```
//! use std::time::Duration;
//! use vel_core::{Archive, Periods};
//!
//! let mut archive = Archive::new(Periods::default(), Some(7));
//! archive.mount();
//! archive.advance(Duration::from_secs(8));
//! assert_eq!(archive.entries().len(), 36);
//! archive.unmount();
//! ```

mod archive;
mod clock;
pub mod content;
mod entry;
mod feed;
mod schedule;
pub mod script;
mod stats;
mod timer;
mod view;

pub use archive::{Archive, Message};
pub use clock::{Clock, FixedClock, LocalClock, TIMESTAMP_FORMAT};
pub use content::FaqEntry;
pub use entry::{LogCategory, LogEntry};
pub use feed::{generate_entry, sample_category, sample_message, FeedSimulator};
pub use schedule::{Fired, Periods, Schedule, TimerKind};
pub use stats::{
    format_thousands, StatsSnapshot, ARCHIVE_STEP_MAX, FRAGMENT_STEP_MAX, INTEGRITY_JITTER,
    INTEGRITY_MAX, INTEGRITY_MIN, THREADS_MAX, THREADS_MIN,
};
pub use timer::Timer;
pub use view::{ParseSectionError, Section, ViewMessage, ViewState};
