use crate::github::types::RepoCard;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};

pub struct DetailPanel<'a> {
    pub repo: &'a RepoCard,
    pub pinned: bool,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let popup = super::centered_rect(60, 60, area);
        if popup.width < 12 || popup.height < 4 {
            return;
        }
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.repo.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));
        let inner = block.inner(popup);
        block.render(popup, buf);
        if inner.width < 8 || inner.height == 0 {
            return;
        }

        let label = Style::default().fg(theme::ACCENT);
        let w = inner.width.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = Vec::new();

        let mut badges: Vec<Span> = Vec::new();
        if self.pinned {
            badges.push(Span::styled("pinned ", Style::default().fg(theme::PIN_COLOR)));
        }
        if self.repo.fork {
            badges.push(Span::styled("fork ", Style::default().fg(theme::DIM_TEXT)));
        }
        if self.repo.archived {
            badges.push(Span::styled("archived ", Style::default().fg(theme::WARN_FG)));
        }
        if !badges.is_empty() {
            lines.push(Line::from(badges));
            lines.push(Line::default());
        }

        let desc = self
            .repo
            .description
            .as_deref()
            .unwrap_or("No description provided.");
        for wrapped in super::wrap_text(desc, w, 4) {
            lines.push(Line::from(Span::raw(wrapped)));
        }
        lines.push(Line::default());

        if let Some(lang) = &self.repo.language {
            lines.push(Line::from(vec![
                Span::styled("Language ", label),
                Span::styled(
                    lang.clone(),
                    Style::default().fg(theme::language_color(lang)),
                ),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Stars ", label),
            Span::styled(
                format!("\u{2605} {}", self.repo.stars),
                Style::default().fg(theme::STAR_COLOR),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Pushed ", label),
            Span::raw(format!(
                "{} ({})",
                self.repo.pushed_date(),
                super::format_time_ago(&self.repo.pushed_at)
            )),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Repo ", label),
            Span::raw(super::truncate_with_ellipsis(&self.repo.html_url, w)),
        ]));
        if let Some(home) = &self.repo.homepage {
            lines.push(Line::from(vec![
                Span::styled("Demo ", label),
                Span::raw(super::truncate_with_ellipsis(home, w)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Esc to close",
            Style::default()
                .fg(theme::DIM_TEXT)
                .add_modifier(Modifier::ITALIC),
        )));

        for (i, line) in lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
        }
    }
}
