#[cfg(feature = "tui")]
pub mod action;
#[cfg(feature = "tui")]
pub mod app;
pub mod args;
pub mod config;
#[cfg(feature = "tui")]
pub mod dialogs;
pub mod i18n;
pub mod logging;
pub mod patterns;
pub mod theme;
#[cfg(feature = "tui")]
pub mod tui;

// Re-export the dialog and converter at crate root for convenience
#[cfg(feature = "tui")]
pub use dialogs::TextPatternDialog;
pub use patterns::{Grid, PixelFont, TextToGrid, text_to_grid};
