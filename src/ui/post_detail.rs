//! Post detail view

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::states::{render_error, render_loading, render_post_not_found};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADING, COLOR_LINK};
use crate::models::User;
use crate::state::{FetchState, PostDetailData, PostDetailState};

pub fn render_post_detail(frame: &mut Frame, area: Rect, state: &PostDetailState, tick: u64) {
    match state.state() {
        FetchState::Idle | FetchState::Loading => {
            render_loading(frame, area, "Loading post details...", tick)
        }
        FetchState::Failed(message) => {
            render_error(frame, area, message, Some("[Enter] Go to Dashboard"))
        }
        FetchState::NotFound => render_post_not_found(frame, area),
        FetchState::Loaded(data) => render_loaded(frame, area, data),
    }
}

fn render_loaded(frame: &mut Frame, area: Rect, data: &PostDetailData) {
    let author_height = if data.author.is_some() { 6 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // title
            Constraint::Length(author_height), // author
            Constraint::Min(3),                // content
            Constraint::Length(1),             // footer
        ])
        .split(area);

    let title = Paragraph::new(Line::styled(
        data.post.title.as_str(),
        Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(title, chunks[0]);

    if let Some(author) = &data.author {
        render_author(frame, chunks[1], author);
    }

    let content = Paragraph::new(data.post.body.as_str())
        .block(panel("Post Content"))
        .wrap(Wrap { trim: false });
    frame.render_widget(content, chunks[2]);

    let mut footer = vec![Span::styled("[Esc] Back to Dashboard", Style::default().fg(COLOR_LINK))];
    if data.author.is_some() {
        footer.push(Span::styled("  [w] Visit website", Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(footer)), chunks[3]);
}

fn render_author(frame: &mut Frame, area: Rect, author: &User) {
    let field = |label: &'static str, value: String, style: Style| {
        Line::from(vec![
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(value, style),
        ])
    };
    let lines = vec![
        field("Name: ", author.name.clone(), Style::default()),
        field("Username: ", author.username.clone(), Style::default()),
        field("Email: ", author.email.clone(), Style::default()),
        field(
            "Website: ",
            author.website_url(),
            Style::default().fg(COLOR_LINK).add_modifier(Modifier::UNDERLINED),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel("Author Information")), area);
}

fn panel(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD),
        ))
}
