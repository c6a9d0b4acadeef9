//! Direct crossterm rendering backend.
//!
//! ```text
//! panels → Painter → CellBuffer → DiffRenderer → crossterm
//! ```

mod cell_buffer;
mod diff_renderer;

pub use cell_buffer::{Cell, CellBuffer, Modifiers, Style};
pub use diff_renderer::DiffRenderer;
