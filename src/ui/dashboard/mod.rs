//! Dashboard view
//!
//! Layout, top to bottom:
//! - "Dashboard Overview" heading
//! - the two charts, side by side on wide terminals and stacked otherwise
//! - "All Posts" heading and the card grid

mod charts;
mod post_grid;

pub use charts::{calculate_segment_widths, render_posts_per_user, render_title_lengths};
pub use post_grid::{render_post_grid, CARD_HEIGHT};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::layout::{grid_columns, should_stack_charts};
use super::states::{render_error, render_loading};
use super::theme::COLOR_HEADING;
use crate::state::{DashboardData, DashboardState, FetchState};

/// Chart panel height: up to ten bars or eight legend rows plus borders
const CHART_HEIGHT: u16 = 12;

/// Render the dashboard into `area`.
///
/// Returns the number of grid columns used, for row-wise navigation.
pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &DashboardState, tick: u64) -> usize {
    let columns = grid_columns(area.width);
    match state.state() {
        FetchState::Idle | FetchState::Loading => {
            render_loading(frame, area, "Loading dashboard...", tick)
        }
        FetchState::Failed(message) => render_error(frame, area, message, None),
        // The dashboard never resolves to NotFound
        FetchState::NotFound => {}
        FetchState::Loaded(data) => {
            render_loaded(frame, area, data, state.selected_index(), columns)
        }
    }
    columns
}

fn render_loaded(frame: &mut Frame, area: Rect, data: &DashboardData, selected: usize, columns: usize) {
    let stacked = should_stack_charts(area.width);
    let charts_height = if stacked { CHART_HEIGHT * 2 } else { CHART_HEIGHT };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // heading
            Constraint::Length(charts_height), // charts
            Constraint::Length(2),             // grid heading
            Constraint::Min(0),                // grid
        ])
        .split(area);

    frame.render_widget(heading("Dashboard Overview"), chunks[0]);

    let chart_areas = Layout::default()
        .direction(if stacked {
            Direction::Vertical
        } else {
            Direction::Horizontal
        })
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(chunks[1]);
    render_posts_per_user(frame, chart_areas[0], &data.posts_per_user);
    render_title_lengths(frame, chart_areas[1], &data.title_lengths);

    frame.render_widget(heading("All Posts"), Rect { y: chunks[2].y + 1, height: 1, ..chunks[2] });
    render_post_grid(frame, chunks[3], &data.cards(), selected, columns);
}

fn heading(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::styled(
        text,
        Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD),
    ))
}
