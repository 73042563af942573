//! "All Posts" card grid
//!
//! Each card shows the title, author, a two-line body excerpt and a
//! "View Details" link. The grid scrolls by whole rows to keep the selected
//! card visible.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::PostCard;
use crate::ui::helpers::{clamp_lines, truncate_to_width};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADING, COLOR_LINK, COLOR_SELECTED};

/// Card height including borders
pub const CARD_HEIGHT: u16 = 7;

const BODY_LINES: usize = 2;

pub fn render_post_grid(
    frame: &mut Frame,
    area: Rect,
    cards: &[PostCard<'_>],
    selected: usize,
    columns: usize,
) {
    let columns = columns.max(1);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = first_visible_row(selected / columns, visible_rows);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_offset, row_area) in row_areas.iter().enumerate() {
        let start = (first_row + row_offset) * columns;
        if start >= cards.len() {
            break;
        }
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = start + col;
            if let Some(card) = cards.get(index) {
                render_card(frame, *cell, card, index == selected);
            }
        }
    }
}

/// First grid row to draw so that `selected_row` is within view.
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.saturating_sub(1))
}

fn render_card(frame: &mut Frame, area: Rect, card: &PostCard<'_>, selected: bool) {
    let border_style = if selected {
        Style::default().fg(COLOR_SELECTED)
    } else {
        Style::default().fg(COLOR_BORDER)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let title_style = Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(truncate_to_width(card.title, width), title_style),
        Line::styled(
            truncate_to_width(&format!("By: {}", card.author), width),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    let mut body = clamp_lines(card.body, width, BODY_LINES);
    body.resize(BODY_LINES, String::new());
    lines.extend(body.into_iter().map(Line::raw));

    let mut link_style = Style::default().fg(COLOR_LINK);
    if selected {
        link_style = link_style.add_modifier(Modifier::UNDERLINED);
    }
    lines.push(Line::styled("View Details →", link_style));

    frame.render_widget(Paragraph::new(lines), inner);
}
