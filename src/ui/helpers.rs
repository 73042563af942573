//! Helper functions for UI rendering

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner animation frames
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick.
pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Truncate `s` to at most `max_width` display columns, ending with `…`
/// when anything was cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Wrap `text` (newlines collapsed to spaces) into lines of at most `width`
/// columns and keep the first `max_lines`, marking a cut with `…`.
pub fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in flat.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
            if ch == ' ' {
                continue;
            }
        }
        current.push(ch);
        current_width += ch_width;
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let trimmed = truncate_to_width(last.trim_end(), width.saturating_sub(1));
            *last = format!("{}…", trimmed.trim_end_matches('…'));
        }
    }
    lines
}

/// A rectangle of `height` rows centered vertically in `area`.
pub fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y_offset = area.height.saturating_sub(height) / 2;
    Rect::new(area.x, area.y + y_offset, area.width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
        assert_eq!(truncate_to_width("hello", 1), "…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_clamp_lines_wraps_and_clamps() {
        let lines = clamp_lines("aaaa bbbb cccc dddd eeee", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "aaaa bbbb");
        assert!(lines[1].ends_with('…'));
        assert!(lines[1].width() <= 9);
    }

    #[test]
    fn test_clamp_lines_collapses_newlines() {
        let lines = clamp_lines("one\ntwo", 20, 2);
        assert_eq!(lines, vec!["one two".to_string()]);
    }

    #[test]
    fn test_clamp_lines_degenerate() {
        assert!(clamp_lines("text", 0, 2).is_empty());
        assert!(clamp_lines("text", 10, 0).is_empty());
        assert!(clamp_lines("", 10, 2).is_empty());
    }

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(10), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(13), SPINNER_FRAMES[3]);
    }

    #[test]
    fn test_center_vertically() {
        let area = Rect::new(2, 4, 20, 10);
        assert_eq!(center_vertically(area, 4), Rect::new(2, 7, 20, 4));
        assert_eq!(center_vertically(area, 50), area);
    }
}

/// Render a buffer as newline-separated rows for text assertions.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
