//! Dashboard charts
//!
//! Posts per user as horizontal bars, one row per user:
//! ```text
//! Leanne Graham   ██████████████████████ 10
//! Ervin Howell    ████████████           5
//! ```
//!
//! Title length distribution as one proportional bar with a legend:
//! ```text
//! ████████████▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▒▒▒▒▒▒▒
//! ■ 10-19  25%
//! ■ 20-29  55%
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::aggregate::{PostCountEntry, TitleBucketEntry};
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::{hex_color, COLOR_BAR, COLOR_BORDER, COLOR_DIM, COLOR_HEADING};

const BLOCK_FILLED: char = '█';
const LEGEND_MARK: &str = "■";

fn chart_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADING).add_modifier(Modifier::BOLD),
        ))
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let line = Line::styled("No posts", Style::default().fg(COLOR_DIM));
    frame.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Posts per User
// ============================================================================

pub fn render_posts_per_user(frame: &mut Frame, area: Rect, entries: &[PostCountEntry]) {
    let block = chart_block("Posts per User");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if entries.is_empty() || inner.width == 0 {
        render_empty(frame, inner);
        return;
    }

    let max_count = entries.iter().map(|e| e.post_count).max().unwrap_or(0);
    let count_width = max_count.to_string().len() as u16;
    let name_width = entries
        .iter()
        .map(|e| e.user_name.width() as u16)
        .max()
        .unwrap_or(0)
        .min(inner.width / 3);
    // name, gap, bar, gap, count
    let bar_space = inner
        .width
        .saturating_sub(name_width + count_width + 2);

    let buf = frame.buffer_mut();
    for (row, entry) in entries.iter().take(inner.height as usize).enumerate() {
        let y = inner.y + row as u16;
        let name = truncate_to_width(&entry.user_name, name_width as usize);
        buf.set_string(inner.x, y, &name, Style::default());

        let bar_x = inner.x + name_width + 1;
        let bar_len = bar_length(entry.post_count, max_count, bar_space);
        paint_run(buf, bar_x, y, bar_len, BLOCK_FILLED, Style::default().fg(COLOR_BAR));

        buf.set_string(
            bar_x + bar_len + 1,
            y,
            entry.post_count.to_string(),
            Style::default().fg(COLOR_DIM),
        );
    }
}

/// Bar length for `count`, scaled so `max` fills `space`.
pub fn bar_length(count: u32, max: u32, space: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    ((count as f32 / max as f32) * space as f32).round() as u16
}

// ============================================================================
// Title Length Distribution
// ============================================================================

pub fn render_title_lengths(frame: &mut Frame, area: Rect, entries: &[TitleBucketEntry]) {
    let block = chart_block("Post Title Length Distribution");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total: u32 = entries.iter().map(|e| e.count).sum();
    if total == 0 || inner.height == 0 {
        render_empty(frame, inner);
        return;
    }

    let counts: Vec<u32> = entries.iter().map(|e| e.count).collect();
    let widths = calculate_segment_widths(&counts, inner.width);

    let buf = frame.buffer_mut();
    let mut x = inner.x;
    for (entry, width) in entries.iter().zip(&widths) {
        let style = Style::default().fg(hex_color(entry.color()));
        paint_run(buf, x, inner.y, *width, BLOCK_FILLED, style);
        x += width;
    }

    // Legend below a spacer row
    let legend_area = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(2),
        ..inner
    };
    if legend_area.height == 0 {
        return;
    }
    let label_width = entries.iter().map(|e| e.range_label.len()).max().unwrap_or(0);
    let legend: Vec<Line> = entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(LEGEND_MARK, Style::default().fg(hex_color(entry.color()))),
                Span::raw(format!(" {:<label_width$}  ", entry.range_label)),
                Span::styled(
                    format!("{:>3}%", entry.percent_of(total)),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(legend), legend_area);
}

/// Split `total_width` into one segment per count, proportional to the
/// counts and summing exactly to `total_width`.
///
/// Boundaries are placed at the rounded cumulative share so rounding error
/// never accumulates.
pub fn calculate_segment_widths(counts: &[u32], total_width: u16) -> Vec<u16> {
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut widths = Vec::with_capacity(counts.len());
    let mut cumulative: u64 = 0;
    let mut previous_boundary: u64 = 0;
    for &count in counts {
        cumulative += count as u64;
        let boundary = (cumulative * total_width as u64 + total / 2) / total;
        widths.push((boundary - previous_boundary) as u16);
        previous_boundary = boundary;
    }
    widths
}

fn paint_run(buf: &mut Buffer, x: u16, y: u16, len: u16, ch: char, style: Style) {
    let right = buf.area.right();
    for dx in 0..len {
        let cx = x + dx;
        if cx >= right {
            break;
        }
        buf[(cx, y)].set_char(ch).set_style(style);
    }
}
