//! Theme and Colors
//!
//! The Pycoder palette: yellow accents on a near-black page, with gray
//! text tiers. Fades are rendered by blending a foreground color toward the
//! page background.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Page Palette
// ============================================================================

/// Page background
pub const PAGE_BG: Color = Color::Rgb(17, 24, 39);

/// Card and navbar background
pub const SURFACE_BG: Color = Color::Rgb(31, 41, 55);

/// Brand accent - Python yellow
pub const ACCENT_YELLOW: Color = Color::Rgb(234, 179, 8);

/// Headings
pub const HEADING_WHITE: Color = Color::Rgb(249, 250, 251);

/// Body copy
pub const BODY_GRAY: Color = Color::Rgb(209, 213, 219);

/// Captions and hints
pub const MUTED_GRAY: Color = Color::Rgb(107, 114, 128);

/// Code snippet text
pub const CODE_GREEN: Color = Color::Rgb(134, 239, 172);

/// Form errors
pub const ERROR_RED: Color = Color::Rgb(248, 113, 113);

/// Confirmations
pub const SUCCESS_GREEN: Color = Color::Rgb(74, 222, 128);

// ============================================================================
// Styles
// ============================================================================

/// Section heading
pub fn heading() -> Style {
    Style::default().fg(HEADING_WHITE).add_modifier(Modifier::BOLD)
}

/// Body text
pub fn body() -> Style {
    Style::default().fg(BODY_GRAY)
}

/// Secondary text
pub fn muted() -> Style {
    Style::default().fg(MUTED_GRAY)
}

/// Accent text
pub fn accent() -> Style {
    Style::default().fg(ACCENT_YELLOW)
}

/// Selected tab, dot or nav item
pub fn selected() -> Style {
    Style::default()
        .fg(PAGE_BG)
        .bg(ACCENT_YELLOW)
        .add_modifier(Modifier::BOLD)
}

// ============================================================================
// Color Math
// ============================================================================

/// Parse `#rrggbb` into a color
pub fn hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Blend `color` toward the page background
///
/// `opacity` 1.0 keeps the color, 0.0 yields the background. Non-RGB colors
/// snap: visible above one half, background below.
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };

    match (color, PAGE_BG) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(br, r, opacity),
            mix(bg, g, opacity),
            mix(bb, b, opacity),
        ),
        _ if opacity >= 0.5 => color,
        _ => PAGE_BG,
    }
}

/// Apply [`fade`] to a style's foreground
pub fn fade_style(style: Style, opacity: f32) -> Style {
    match style.fg {
        Some(fg) => style.fg(fade(fg, opacity)),
        None => style.fg(fade(BODY_GRAY, opacity)),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(from: u8, to: u8, t: f32) -> u8 {
    let from = f32::from(from);
    let to = f32::from(to);
    (from + (to - from) * t).round().clamp(0.0, 255.0) as u8
}
