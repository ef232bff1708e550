pub mod card_grid;
pub mod detail_panel;
pub mod header_bar;
pub mod help_panel;
pub mod input;
pub mod status_bar;
pub mod theme;
pub mod toast;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max <= 1 {
        return "\u{2026}".to_string();
    }
    let mut result = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if w + cw > max - 1 {
            break;
        }
        result.push(ch);
        w += cw;
    }
    result.push('\u{2026}');
    result
}

/// Greedy word wrap into at most `max_lines` lines of `width` cells.
/// Overflow is marked with an ellipsis on the last line.
pub fn wrap_text(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut overflow = false;

    for word in s.split_whitespace() {
        let word_w = UnicodeWidthStr::width(word);
        let line_w = UnicodeWidthStr::width(current.as_str());

        if current.is_empty() {
            current = truncate_with_ellipsis(word, width);
        } else if line_w + 1 + word_w <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            if lines.len() + 1 == max_lines {
                overflow = true;
                break;
            }
            lines.push(std::mem::take(&mut current));
            current = truncate_with_ellipsis(word, width);
        }
    }

    if !current.is_empty() {
        if overflow {
            current = truncate_with_ellipsis(&format!("{current} \u{2026}"), width);
        }
        lines.push(current);
    }
    lines
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vert = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Min(0),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Min(0),
    ])
    .split(vert[1])[1]
}

pub fn format_time_ago(time: &chrono::DateTime<chrono::Utc>) -> String {
    let dur = chrono::Utc::now().signed_duration_since(*time);
    let (val, unit) = if dur.num_seconds() < 60 {
        (dur.num_seconds().max(0), "s")
    } else if dur.num_minutes() < 60 {
        (dur.num_minutes(), "m")
    } else if dur.num_hours() < 24 {
        (dur.num_hours(), "h")
    } else if dur.num_days() < 30 {
        (dur.num_days(), "d")
    } else if dur.num_days() < 365 {
        (dur.num_days() / 30, "mo")
    } else {
        (dur.num_days() / 365, "y")
    };
    format!("{val}{unit} ago")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_splits_on_word_boundaries() {
        let lines = wrap_text("a terminal portfolio of repositories", 14, 4);
        assert_eq!(lines, vec!["a terminal", "portfolio of", "repositories"]);
    }

    #[test]
    fn wrap_marks_overflow() {
        let lines = wrap_text("one two three four five six seven", 9, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('\u{2026}'));
    }

    #[test]
    fn wrap_handles_empty_input() {
        assert!(wrap_text("", 10, 2).is_empty());
        assert!(wrap_text("words", 0, 2).is_empty());
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("longer-name", 7), "longer\u{2026}");
    }
}
