//! Color palette and fade helpers for the terminal UI.
//!
//! Screens fade by scaling their colors toward black, the terminal stand-in
//! for a translucent black overlay. Palette entries are plain RGB so the
//! scaling is exact.

use ratatui::style::{Color, Modifier, Style};

pub const TEXT: Color = Color::Rgb(220, 220, 210);
pub const MUTED: Color = Color::Rgb(130, 130, 125);
pub const TITLE: Color = Color::Rgb(80, 200, 220);
pub const ACCENT: Color = Color::Rgb(235, 190, 80);
pub const SELECTED: Color = Color::Rgb(150, 205, 255);
pub const DANGER: Color = Color::Rgb(220, 90, 80);
pub const GOOD: Color = Color::Rgb(120, 200, 110);
pub const DARK_RED: Color = Color::Rgb(150, 40, 40);

/// Scales an RGB color toward black by `brightness` in [0,1].
pub fn scale(color: Color, brightness: f32) -> Color {
    let b = brightness.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b_) => Color::Rgb(
            (r as f32 * b) as u8,
            (g as f32 * b) as u8,
            (b_ as f32 * b) as u8,
        ),
        other => other,
    }
}

/// Foreground style at the given fade level.
pub fn faded(color: Color, brightness: f32) -> Style {
    Style::default().fg(scale(color, brightness))
}

/// Style for a menu entry, brighter and bold while selected.
pub fn menu_entry(selected: bool, brightness: f32) -> Style {
    if selected {
        faded(SELECTED, brightness).add_modifier(Modifier::BOLD)
    } else {
        faded(TEXT, brightness)
    }
}

/// Health readout color by remaining fraction.
pub fn health(current: u32, maximum: u32, brightness: f32) -> Style {
    if maximum == 0 {
        return faded(MUTED, brightness);
    }
    let percent = (current * 100) / maximum;
    let color = match percent {
        75..=100 => GOOD,
        50..=74 => ACCENT,
        _ => DANGER,
    };
    faded(color, brightness)
}
