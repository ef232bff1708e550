use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBar<'a> {
    pub username: &'a str,
    pub total: usize,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans: Vec<Span> = Vec::new();

        spans.push(Span::styled(
            " \u{f09b} gitfolio",
            Style::default()
                .fg(theme::ACCENT)
                .bg(theme::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            " \u{2503} ",
            Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
        ));
        spans.push(Span::styled(
            format!("@{}", self.username),
            Style::default().fg(theme::TITLE_FG).bg(theme::HEADER_BG),
        ));
        if self.total > 0 {
            spans.push(Span::styled(
                format!("  {} public repos", self.total),
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let right = "? help ";
        let right_w = UnicodeWidthStr::width(right);
        let area_w = area.width as usize;
        if area_w > right_w {
            let right_x = area.x + (area_w - right_w) as u16;
            let right_span = Span::styled(
                right,
                Style::default().fg(theme::DIM_TEXT).bg(theme::HEADER_BG),
            );
            buf.set_line(right_x, area.y, &Line::from(right_span), right_w as u16);
        }
    }
}
