//! Terminal frontend for the VEL archival console.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::struct_excessive_bools)] // "more than 3 bools in struct"
#![allow(clippy::match_same_arms)] // "match arms have identical bodies" (intentional for readability)
#![allow(clippy::doc_markdown)] // "item in documentation missing backticks"
//!
//! Draws the [`vel_core::Archive`] state with `crossterm` directly: panels
//! paint into a [`CellBuffer`] through a clipped [`canvas::Painter`], and a
//! [`DiffRenderer`] writes only the cells that changed since the last frame.
//!
//! ```text
//! VelApp ── Frame ──▶ panels::draw ──▶ CellBuffer ──▶ DiffRenderer ──▶ Terminal
//!   ▲                                                                     │
//!   └──────────────── InputHandler ◀── crossterm events ◀─────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use vel_terminal::{VelApp, VelConfig};
//!
//! let config = VelConfig {
//!     seed: Some(1),
//!     ..VelConfig::default()
//! };
//! let mut app = VelApp::from_config(&config);
//! let frame = app.render_text(100, 30);
//! assert!(frame.contains("> LIVE_CONSOLE"));
//! ```

mod app;
pub mod canvas;
mod color;
mod config;
pub mod direct;
mod error;
mod input;
pub mod layout;
pub mod logging;
pub mod panels;
pub mod theme;

pub use app::{
    AppConfig, CrosstermBackend, CrosstermTerminal, GenericTerminal, Terminal, TerminalBackend,
    TestableBackend, VelApp, SCROLL_PAGE,
};
pub use color::{Color, ColorMode, ColorParseError};
pub use config::{SkippedConfig, VelConfig};
pub use direct::{Cell, CellBuffer, DiffRenderer, Modifiers, Style};
pub use error::VelError;
pub use input::{Action, InputHandler, KeyBinding};
pub use layout::Layout;
pub use theme::Theme;
