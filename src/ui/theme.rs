//! Color theme constants for the postdash UI

use ratatui::style::Color;

// ============================================================================
// Shell
// ============================================================================

/// Sidebar background (slate)
pub const COLOR_SIDEBAR_BG: Color = Color::Rgb(31, 41, 55);

/// Sidebar title - light blue
pub const COLOR_SIDEBAR_TITLE: Color = Color::Rgb(147, 197, 253);

/// Active navigation item background
pub const COLOR_NAV_ACTIVE_BG: Color = Color::Rgb(55, 65, 81);

/// Headings in the main area
pub const COLOR_HEADING: Color = Color::White;

/// Post titles and links - blue
pub const COLOR_LINK: Color = Color::Rgb(96, 165, 250);

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Card and panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the selected card
pub const COLOR_SELECTED: Color = Color::Yellow;

/// Error messages
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Charts
// ============================================================================

/// Posts-per-user bars (#8884d8)
pub const COLOR_BAR: Color = Color::Rgb(136, 132, 216);

/// Parse a `#RRGGBB` hex string into a color.
///
/// Malformed input yields [`Color::Reset`].
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Reset;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}
