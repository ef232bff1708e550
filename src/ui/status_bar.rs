use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub shown: usize,
    pub total: usize,
    pub pinned: usize,
    pub filtering: bool,
    pub filter_text: &'a str,
    pub syncing: bool,
    pub last_sync: &'a str,
    pub rate_limit: Option<u32>,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        if self.filtering {
            let line = Line::from(vec![
                Span::styled(
                    " /",
                    Style::default()
                        .fg(theme::FILTER_COLOR)
                        .bg(theme::STATUS_BG)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(self.filter_text.to_string(), bg),
                Span::styled(
                    "\u{258c}",
                    Style::default().fg(theme::FILTER_COLOR).bg(theme::STATUS_BG),
                ),
            ]);
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let sep = Span::styled(
            "\u{2502}",
            Style::default().fg(theme::SEPARATOR).bg(theme::STATUS_BG),
        );

        let mut spans = Vec::new();
        spans.push(Span::styled(
            format!(" {}/{} repos ", self.shown, self.total),
            bg,
        ));

        if self.pinned > 0 {
            spans.push(sep.clone());
            spans.push(Span::styled(
                format!(" {} pinned ", self.pinned),
                Style::default().fg(theme::PIN_COLOR).bg(theme::STATUS_BG),
            ));
        }

        if !self.filter_text.is_empty() {
            spans.push(sep.clone());
            spans.push(Span::styled(
                format!(" filter: {} ", self.filter_text),
                Style::default().fg(theme::FILTER_COLOR).bg(theme::STATUS_BG),
            ));
        }

        spans.push(sep.clone());
        if self.syncing {
            spans.push(Span::styled(
                " syncing\u{2026} ",
                Style::default().fg(theme::ACCENT).bg(theme::STATUS_BG),
            ));
        } else {
            spans.push(Span::styled(format!(" synced: {} ", self.last_sync), bg));
        }

        if let Some(remaining) = self.rate_limit {
            spans.push(sep);
            spans.push(Span::styled(format!(" API: {remaining} "), bg));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
