//! Left navigation sidebar

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_NAV_ACTIVE_BG, COLOR_SIDEBAR_BG, COLOR_SIDEBAR_TITLE};
use crate::app::Route;

const KEY_HINTS: [(&str, &str); 5] = [
    ("←↑↓→", "select"),
    ("Enter", "open"),
    ("Esc", "back"),
    ("w", "website"),
    ("q", "quit"),
];

pub fn render_sidebar(frame: &mut Frame, area: Rect, route: &Route) {
    let block = Block::default()
        .style(Style::default().bg(COLOR_SIDEBAR_BG))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let footer_height = KEY_HINTS.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(1),    // nav
            Constraint::Length(footer_height),
        ])
        .split(inner);

    let title = Paragraph::new(Line::styled(
        "My Dashboard",
        Style::default()
            .fg(COLOR_SIDEBAR_TITLE)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, chunks[0]);

    let nav_style = if route.is_dashboard() {
        Style::default().bg(COLOR_NAV_ACTIVE_BG).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let width = chunks[1].width as usize;
    let nav = Paragraph::new(Line::styled(format!("{:<width$}", " Dashboard"), nav_style));
    frame.render_widget(nav, chunks[1]);

    let mut footer: Vec<Line> = KEY_HINTS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{:<6}", key), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(*action, Style::default().fg(COLOR_DIM)),
            ])
        })
        .collect();
    footer.push(Line::raw(""));
    footer.push(Line::styled("(c) 2024 My App", Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
