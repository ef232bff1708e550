use crate::github::types::RepoCard;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

pub const CARD_MIN_WIDTH: u16 = 36;
pub const CARD_HEIGHT: u16 = 7;

pub fn grid_columns(width: u16) -> usize {
    (width / CARD_MIN_WIDTH).max(1) as usize
}

pub struct CardItem<'a> {
    pub repo: &'a RepoCard,
    pub pinned: bool,
}

pub struct CardGrid<'a> {
    pub cards: &'a [CardItem<'a>],
    pub selected: usize,
    pub scroll_row: usize,
    pub columns: usize,
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buf) {
        if area.width == 0 || area.height == 0 || self.cards.is_empty() {
            return;
        }

        let cols = self.columns.max(1);
        let card_w = (area.width / cols as u16).max(CARD_MIN_WIDTH.min(area.width));

        for (idx, item) in self.cards.iter().enumerate() {
            let row = idx / cols;
            if row < self.scroll_row {
                continue;
            }
            let y = area.y + ((row - self.scroll_row) as u16) * CARD_HEIGHT;
            if y >= area.bottom() {
                break;
            }
            // partial bottom row is drawn clipped as a scroll hint
            let h = CARD_HEIGHT.min(area.bottom() - y);
            if h < 3 {
                break;
            }

            let col = (idx % cols) as u16;
            let x = area.x + col * card_w;
            let w = if col as usize == cols - 1 {
                area.width.saturating_sub(col * card_w)
            } else {
                card_w
            };
            if w < 4 || x >= area.right() {
                continue;
            }

            render_card(item, idx == self.selected, Rect::new(x, y, w, h), buf);
        }
    }
}

fn render_card(item: &CardItem, selected: bool, area: Rect, buf: &mut Buf) {
    let border_style = if selected {
        Style::default()
            .fg(theme::ACTIVE_BORDER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::CARD_BORDER)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width < 4 || inner.height == 0 {
        return;
    }
    let w = inner.width as usize;
    let repo = item.repo;

    // Title row: name (pin mark) left, star count right
    let stars = format!("\u{2605} {}", repo.stars);
    let mut stars_w = UnicodeWidthStr::width(stars.as_str());
    if stars_w + 4 > w {
        stars_w = 0; // no room for the star count on a sliver of a card
    }
    let pin_w = if item.pinned { 2 } else { 0 };
    let name = super::truncate_with_ellipsis(&repo.name, w.saturating_sub(stars_w + 1 + pin_w));

    let mut title_spans = vec![Span::styled(
        name,
        Style::default()
            .fg(theme::TITLE_FG)
            .add_modifier(Modifier::BOLD),
    )];
    if item.pinned {
        title_spans.push(Span::styled(
            " \u{25c6}",
            Style::default().fg(theme::PIN_COLOR),
        ));
    }
    buf.set_line(inner.x, inner.y, &Line::from(title_spans), inner.width);
    if stars_w > 0 {
        buf.set_line(
            inner.x + (w - stars_w) as u16,
            inner.y,
            &Line::from(Span::styled(stars, Style::default().fg(theme::STAR_COLOR))),
            stars_w as u16,
        );
    }

    // Description, two lines max
    let desc_lines = match &repo.description {
        Some(desc) => super::wrap_text(desc, w, 2),
        None => vec!["No description provided.".to_string()],
    };
    let desc_style = if repo.description.is_some() {
        Style::default()
    } else {
        Style::default().fg(theme::DIM_TEXT)
    };
    for (i, line) in desc_lines.iter().enumerate() {
        let y = inner.y + 1 + i as u16;
        if y >= inner.bottom() {
            return;
        }
        buf.set_line(
            inner.x,
            y,
            &Line::from(Span::styled(line.clone(), desc_style)),
            inner.width,
        );
    }

    // Chips: language, last push, status flags
    let chip_y = inner.y + 3;
    if chip_y < inner.bottom() {
        let mut chips: Vec<Span> = Vec::new();
        if let Some(lang) = &repo.language {
            chips.push(Span::styled(
                "\u{25cf} ",
                Style::default().fg(theme::language_color(lang)),
            ));
            chips.push(Span::raw(lang.clone()));
            chips.push(Span::raw("  "));
        }
        chips.push(Span::styled(
            repo.pushed_date(),
            Style::default().fg(theme::DIM_TEXT),
        ));
        if repo.fork {
            chips.push(Span::styled("  fork", Style::default().fg(theme::DIM_TEXT)));
        }
        if repo.archived {
            chips.push(Span::styled(
                "  archived",
                Style::default().fg(theme::WARN_FG),
            ));
        }
        buf.set_line(inner.x, chip_y, &Line::from(chips), inner.width);
    }

    // Links: repo URL, demo marker when a homepage exists
    let link_y = inner.y + 4;
    if link_y < inner.bottom() {
        let demo_w = if repo.homepage.is_some() { 6 } else { 0 };
        let url = super::truncate_with_ellipsis(&repo.html_url, w.saturating_sub(demo_w));
        let mut links = vec![Span::styled(url, Style::default().fg(theme::DIM_TEXT))];
        if repo.homepage.is_some() {
            links.push(Span::styled(" +demo", Style::default().fg(theme::ACCENT)));
        }
        buf.set_line(inner.x, link_y, &Line::from(links), inner.width);
    }
}
