//! Terminal theme helpers.
//!
//! One "phosphor" palette drives both the coloured CLI output (`colored`) and
//! the ratatui styles used by the TUI.  Respects the `NO_COLOR` env-var and
//! the `--no-color` CLI flag.
//!
//! # Palette
//!
//! | Token          | Hex       | Usage                          |
//! |----------------|-----------|--------------------------------|
//! | accent         | `#3DDC84` | headings, focused borders      |
//! | accent_bright  | `#7CF5A8` | titles, focused controls       |
//! | lit            | `#22C55E` | active dot-matrix cells        |
//! | unlit          | `#2A2F2C` | inactive dot-matrix cells      |
//! | error          | `#E23D2D` | errors, failures               |
//! | muted          | `#7D8A82` | de-emphasis, hints             |

use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::patterns::Grid;

// ── Global color toggle ─────────────────────────────────────────────────────

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Call once at startup (after CLI parsing) to disable colour globally.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
    colored::control::set_override(false);
}

/// Initialise the colour system.  Checks `NO_COLOR` env-var and optional
/// `--no-color` flag.
pub fn init_color(no_color_flag: bool) {
    if no_color_flag
        || std::env::var("NO_COLOR")
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    {
        disable_color();
    }
}

pub fn is_color() -> bool {
    !COLOR_DISABLED.load(Ordering::Relaxed)
}

/// Palette hex values — source of truth.
pub mod palette {
    pub const ACCENT: (u8, u8, u8) = (0x3D, 0xDC, 0x84);
    pub const ACCENT_BRIGHT: (u8, u8, u8) = (0x7C, 0xF5, 0xA8);
    pub const LIT: (u8, u8, u8) = (0x22, 0xC5, 0x5E);
    pub const UNLIT: (u8, u8, u8) = (0x2A, 0x2F, 0x2C);
    pub const ERROR: (u8, u8, u8) = (0xE2, 0x3D, 0x2D);
    pub const MUTED: (u8, u8, u8) = (0x7D, 0x8A, 0x82);
}

// ── Themed formatting helpers ───────────────────────────────────────────────

fn apply(text: &str, rgb: (u8, u8, u8)) -> String {
    if is_color() {
        text.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        text.to_string()
    }
}

/// Primary accent (headings, labels).
pub fn accent(text: &str) -> String {
    apply(text, palette::ACCENT)
}

/// Error / failure.
pub fn error(text: &str) -> String {
    apply(text, palette::ERROR)
}

/// De-emphasis / metadata.
pub fn muted(text: &str) -> String {
    apply(text, palette::MUTED)
}

/// Render a grid for the terminal, colouring lit and unlit cells.
pub fn grid_text(grid: &Grid, on: char, off: char) -> String {
    let on = on.to_string();
    let off = off.to_string();
    let on = apply(&on, palette::LIT);
    let off = apply(&off, palette::UNLIT);

    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&c| if c { on.as_str() } else { off.as_str() })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ───────────────────────────────────────────────────────────────────


// ── Ratatui palette ─────────────────────────────────────────────────────────
//
// Pre-built `ratatui::style::Color` and `Style` values derived from the
// phosphor palette, for use in TUI rendering.

#[cfg(feature = "tui")]
pub mod tui_palette {
    use ratatui::style::{Color, Modifier, Style};

    use super::palette;

    // Convenience: convert palette tuple to ratatui Color.
    const fn rgb(c: (u8, u8, u8)) -> Color {
        Color::Rgb(c.0, c.1, c.2)
    }

    // ── Colours ─────────────────────────────────────────────

    pub const ACCENT: Color = rgb(palette::ACCENT);
    pub const ACCENT_BRIGHT: Color = rgb(palette::ACCENT_BRIGHT);
    pub const LIT: Color = rgb(palette::LIT);
    pub const UNLIT: Color = rgb(palette::UNLIT);
    pub const MUTED: Color = rgb(palette::MUTED);

    pub const SURFACE_1: Color = Color::Rgb(0x0A, 0x0C, 0x0B); // deepest background
    pub const SURFACE_3: Color = Color::Rgb(0x1A, 0x1E, 0x1C); // element background
    pub const SURFACE_4: Color = Color::Rgb(0x26, 0x2B, 0x28); // hover/elevated
    pub const SURFACE_6: Color = Color::Rgb(0x3A, 0x40, 0x3C); // borders
    pub const SURFACE_9: Color = Color::Rgb(0x80, 0x88, 0x83); // muted text
    pub const SURFACE_12: Color = Color::Rgb(0xEC, 0xF0, 0xED); // primary text

    pub const TEXT: Color = SURFACE_12;
    pub const TEXT_DIM: Color = SURFACE_9;

    // ── Pre-built styles ────────────────────────────────────

    /// Border style for the focused dialog / pane.
    pub const fn focused_border() -> Style {
        Style::new().fg(ACCENT_BRIGHT)
    }

    /// Border style for unfocused containers.
    pub const fn unfocused_border() -> Style {
        Style::new().fg(SURFACE_6)
    }

    /// Dialog / pane title.
    pub const fn title_focused() -> Style {
        Style::new().fg(ACCENT_BRIGHT).add_modifier(Modifier::BOLD)
    }

    /// Section heading inside a dialog.
    pub const fn section() -> Style {
        Style::new().fg(SURFACE_12).add_modifier(Modifier::BOLD)
    }

    /// Style for the input prompt indicator when active.
    pub const fn prompt_active() -> Style {
        Style::new().fg(ACCENT_BRIGHT).add_modifier(Modifier::BOLD)
    }

    /// Style for the input prompt indicator when inactive.
    pub const fn prompt_inactive() -> Style {
        Style::new().fg(MUTED)
    }

    /// Placeholder text in an empty input.
    pub const fn placeholder() -> Style {
        Style::new().fg(SURFACE_9).add_modifier(Modifier::ITALIC)
    }

    /// Status line hint text style.
    pub const fn hint() -> Style {
        Style::new().fg(SURFACE_9)
    }

    /// Button at rest.
    pub const fn button() -> Style {
        Style::new().fg(SURFACE_12).bg(SURFACE_4)
    }

    /// Button holding keyboard focus.
    pub const fn button_focused() -> Style {
        Style::new()
            .fg(SURFACE_1)
            .bg(ACCENT_BRIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Button that cannot be activated.
    pub const fn button_disabled() -> Style {
        Style::new().fg(SURFACE_6).bg(SURFACE_3).add_modifier(Modifier::DIM)
    }

    /// Active dot-matrix cell.
    pub const fn cell_on() -> Style {
        Style::new().fg(LIT)
    }

    /// Inactive dot-matrix cell.
    pub const fn cell_off() -> Style {
        Style::new().fg(UNLIT)
    }

    /// Dialog body background.
    pub const fn popup_bg() -> Style {
        Style::new().bg(SURFACE_3).fg(SURFACE_12)
    }

    /// Dimmed area behind an open dialog.
    pub const fn backdrop() -> Style {
        Style::new().fg(SURFACE_6).add_modifier(Modifier::DIM)
    }
}
