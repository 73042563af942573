//! UI rendering for postdash
//!
//! The frame is split into the navigation sidebar (hidden on narrow
//! terminals) and a main area showing the mounted route:
//! - `/` - dashboard overview with charts and the post grid
//! - `/posts/{id}` - post detail with author information
//! - anything else - 404 page

mod dashboard;
mod helpers;
mod layout;
mod post_detail;
mod sidebar;
mod states;
mod theme;

pub use dashboard::{calculate_segment_widths, CARD_HEIGHT};
pub use helpers::{truncate_to_width, SPINNER_FRAMES};
pub use layout::{breakpoints, grid_columns, SIDEBAR_WIDTH};
pub use theme::hex_color;

use ratatui::{layout::Rect, Frame};

use crate::app::{App, Route};
use dashboard::render_dashboard;
use post_detail::render_post_detail;
use sidebar::render_sidebar;
use states::render_page_not_found;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the mounted route.
///
/// Records the post grid's column count on the app for row-wise navigation.
pub fn render(frame: &mut Frame, app: &mut App) {
    let (sidebar_area, main_area) = layout::split_shell(frame.area());
    if let Some(area) = sidebar_area {
        render_sidebar(frame, area, &app.route);
    }

    let main_area = inset(main_area);
    match &app.route {
        Route::Dashboard => {
            app.grid_columns = render_dashboard(frame, main_area, &app.dashboard, app.tick_count);
        }
        Route::PostDetail { .. } => {
            render_post_detail(frame, main_area, &app.post_detail, app.tick_count);
        }
        Route::NotFound { path } => render_page_not_found(frame, main_area, path),
    }
}

/// One column and row of breathing room around the main area.
fn inset(area: Rect) -> Rect {
    if area.width < 4 || area.height < 2 {
        return area;
    }
    Rect::new(area.x + 1, area.y, area.width - 2, area.height - 1)
}
