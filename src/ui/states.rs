//! Full-area status screens: loading, error, not found.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{center_vertically, spinner_frame};
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_HEADING, COLOR_LINK};

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let height = lines.len() as u16;
    let paragraph = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, height));
}

/// Spinner plus message, centered.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str, tick: u64) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(COLOR_LINK)),
        Span::raw(" "),
        Span::styled(message.to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    render_centered(frame, area, vec![line]);
}

/// `Error: {message}` in red, with an optional key hint below.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, hint: Option<&str>) {
    let mut lines = vec![Line::styled(
        format!("Error: {}", message),
        Style::default().fg(COLOR_ERROR),
    )];
    if let Some(hint) = hint {
        lines.push(Line::raw(""));
        lines.push(Line::styled(hint.to_string(), Style::default().fg(COLOR_LINK)));
    }
    render_centered(frame, area, lines);
}

/// A post that the API answered with no content.
pub fn render_post_not_found(frame: &mut Frame, area: Rect) {
    render_centered(
        frame,
        area,
        vec![
            Line::styled("Post not found.", Style::default().fg(COLOR_DIM)),
            Line::raw(""),
            Line::styled("[Esc] Back to Dashboard", Style::default().fg(COLOR_LINK)),
        ],
    );
}

/// Catch-all for paths no route matches.
pub fn render_page_not_found(frame: &mut Frame, area: Rect, path: &str) {
    render_centered(
        frame,
        area,
        vec![
            Line::styled(
                "404 - Page Not Found",
                Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD),
            ),
            Line::styled(path.to_string(), Style::default().fg(COLOR_DIM)),
            Line::raw(""),
            Line::styled("[Esc] Go to Dashboard", Style::default().fg(COLOR_LINK)),
        ],
    );
}

// ============================================================================
// Tests
// ============================================================================
