//! Dialog modules for the TUI.
//!
//! Each dialog handles its own state, key handling, and rendering.

mod text_pattern;

pub use text_pattern::{CELL_WIDTH, Focus, PREVIEW_ROWS, TextPatternDialog, preview_columns};
