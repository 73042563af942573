//! Responsive layout helpers
//!
//! Terminal width decides whether the sidebar is shown, whether the two
//! charts sit side by side, and how many columns the post grid has.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Below this the sidebar is hidden
    pub const SIDEBAR_MIN_WIDTH: u16 = 70;
    /// Below this the charts are stacked
    pub const CHARTS_SIDE_BY_SIDE_WIDTH: u16 = 90;
    /// Main-area width for a second grid column
    pub const GRID_TWO_COLUMNS: u16 = 60;
    /// Main-area width for a third grid column
    pub const GRID_THREE_COLUMNS: u16 = 100;
}

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;

/// Split the frame into an optional sidebar and the main area.
pub fn split_shell(area: Rect) -> (Option<Rect>, Rect) {
    if area.width < breakpoints::SIDEBAR_MIN_WIDTH {
        return (None, area);
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(area);
    (Some(chunks[0]), chunks[1])
}

/// Number of post grid columns for a main area of `width` columns.
pub fn grid_columns(width: u16) -> usize {
    if width >= breakpoints::GRID_THREE_COLUMNS {
        3
    } else if width >= breakpoints::GRID_TWO_COLUMNS {
        2
    } else {
        1
    }
}

/// Whether the charts should be stacked vertically.
pub fn should_stack_charts(width: u16) -> bool {
    width < breakpoints::CHARTS_SIDE_BY_SIDE_WIDTH
}
