use crate::config::Config;
use crate::error::{GitfolioError, Result};
use crate::event::AppEvent;
use crate::github::client::GitHubClient;
use crate::github::types::RepoCard;
use crate::loader::PortfolioData;
use crate::order::{self, Portfolio};
use crate::ui::{
    card_grid::{self, CardGrid, CardItem, CARD_HEIGHT},
    detail_panel::DetailPanel,
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action},
    status_bar::StatusBar,
    theme,
    toast::{Notification, NotifyLevel, Toast},
};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub struct App {
    pub config: Config,
    pub client: GitHubClient,
    pub portfolio: Portfolio,

    pub loading: bool,
    pub load_error: Option<String>,
    pub last_sync: Option<DateTime<Utc>>,
    pub rate_limit: Option<u32>,

    pub selected: usize,
    pub scroll_row: usize,
    grid_cols: usize,

    pub show_detail: bool,
    pub show_help: bool,
    pub filter_mode: bool,
    pub filter_text: String,

    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let username = config.username.trim().to_string();
        if username.is_empty() {
            return Err(GitfolioError::Config(
                "no GitHub username configured; pass one as an argument or set GITFOLIO_USERNAME"
                    .into(),
            ));
        }
        let client = GitHubClient::new(&username, config.github_token.as_deref())?;

        Ok(Self {
            config,
            client,
            portfolio: Portfolio::default(),
            loading: false,
            load_error: None,
            last_sync: None,
            rate_limit: None,
            selected: 0,
            scroll_row: 0,
            grid_cols: 1,
            show_detail: false,
            show_help: false,
            filter_mode: false,
            filter_text: String::new(),
            notifications: Vec::new(),
            should_quit: false,
        })
    }

    /// Cards currently on screen: display limit first, then the filter.
    pub fn visible_cards(&self) -> Vec<CardItem<'_>> {
        let query = self.filter_text.to_lowercase();
        self.portfolio
            .cards
            .iter()
            .enumerate()
            .take(self.config.card_limit())
            .filter(|(_, card)| filter_matches(card, &query))
            .map(|(idx, repo)| CardItem {
                repo,
                pinned: idx < self.portfolio.pinned,
            })
            .collect()
    }

    pub fn apply_result(&mut self, result: std::result::Result<PortfolioData, String>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.rate_limit = data.rate_limit;
                self.portfolio = order::prioritize(data.repos, &data.pins);
                self.last_sync = Some(Utc::now());
                self.load_error = None;
                let len = self.visible_cards().len();
                if self.selected >= len {
                    self.selected = len.saturating_sub(1);
                }
                if self.rate_limit.is_some_and(|r| r < 10) {
                    self.notify(
                        NotifyLevel::Warn,
                        "GitHub API quota nearly exhausted; set GITHUB_TOKEN to raise it",
                    );
                }
            }
            Err(msg) => {
                tracing::error!(error = %msg, "portfolio fetch failed");
                // stale cards beat a blank screen; only an empty app
                // falls back to the full error state
                if self.portfolio.cards.is_empty() {
                    self.load_error = Some(msg.clone());
                }
                self.notify(NotifyLevel::Error, format!("fetch failed: {msg}"));
            }
        }
    }

    pub fn notify(&mut self, level: NotifyLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Returns true when the user asked for a refresh.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.filter_mode);
                self.handle_action(action)
            }
            AppEvent::Portfolio(result) => {
                self.apply_result(result);
                false
            }
            AppEvent::Resize | AppEvent::RefreshDue => false,
        }
    }

    fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveDown => self.move_selection(self.grid_cols as isize),
            Action::MoveUp => self.move_selection(-(self.grid_cols as isize)),
            Action::MoveRight => self.move_selection(1),
            Action::MoveLeft => self.move_selection(-1),
            Action::Select => {
                if !self.visible_cards().is_empty() {
                    self.show_detail = !self.show_detail;
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::Filter => {
                self.filter_mode = true;
                self.show_detail = false;
                self.show_help = false;
            }
            Action::FilterChar(c) => {
                self.filter_text.push(c);
                self.reset_selection();
            }
            Action::FilterBackspace => {
                self.filter_text.pop();
                self.reset_selection();
            }
            Action::FilterConfirm | Action::FilterCancel => {
                self.filter_mode = false;
                if matches!(action, Action::FilterCancel) {
                    self.filter_text.clear();
                    self.reset_selection();
                }
            }
            Action::Refresh => {
                if !self.loading {
                    self.notify(NotifyLevel::Info, "refreshing");
                }
                return true;
            }
            Action::ClosePopup => {
                if self.show_help {
                    self.show_help = false;
                } else if self.show_detail {
                    self.show_detail = false;
                } else if !self.filter_text.is_empty() {
                    self.filter_text.clear();
                    self.reset_selection();
                }
            }
            Action::None => {}
        }
        false
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.scroll_row = 0;
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.visible_cards().len();
        if len == 0 {
            return;
        }
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.notifications.retain(|n| !n.expired());
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        frame.render_widget(
            HeaderBar {
                username: &self.config.username,
                total: self.portfolio.cards.len(),
            },
            chunks[0],
        );

        let body = chunks[1];
        self.grid_cols = card_grid::grid_columns(body.width);
        let rows_visible = ((body.height / CARD_HEIGHT) as usize).max(1);
        let vis_len = self.visible_cards().len();
        if self.selected >= vis_len {
            self.selected = vis_len.saturating_sub(1);
        }
        self.ensure_scroll_bounds(rows_visible, vis_len);

        let visible = self.visible_cards();
        if visible.is_empty() {
            frame.render_widget(
                Paragraph::new(self.placeholder_lines()).alignment(Alignment::Center),
                lowered(body),
            );
        } else {
            frame.render_widget(
                CardGrid {
                    cards: &visible,
                    selected: self.selected,
                    scroll_row: self.scroll_row,
                    columns: self.grid_cols,
                },
                body,
            );
        }

        let last_sync = self
            .last_sync
            .map(|t| crate::ui::format_time_ago(&t))
            .unwrap_or_else(|| "never".to_string());
        frame.render_widget(
            StatusBar {
                shown: visible.len(),
                total: self.portfolio.cards.len(),
                pinned: self.portfolio.pinned,
                filtering: self.filter_mode,
                filter_text: &self.filter_text,
                syncing: self.loading,
                last_sync: &last_sync,
                rate_limit: self.rate_limit,
            },
            chunks[2],
        );

        if self.show_detail {
            if let Some(item) = visible.get(self.selected) {
                frame.render_widget(
                    DetailPanel {
                        repo: item.repo,
                        pinned: item.pinned,
                    },
                    size,
                );
            }
        }
        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
        if let Some(n) = self.notifications.last() {
            frame.render_widget(Toast { notification: n }, size);
        }
    }

    fn placeholder_lines(&self) -> Vec<Line<'static>> {
        if let Some(err) = &self.load_error {
            vec![
                Line::from("Unable to load repositories from GitHub right now."),
                Line::from(""),
                Line::styled(err.clone(), Style::default().fg(theme::ERROR_FG)),
                Line::from(""),
                Line::styled(
                    "r to retry \u{2502} q to quit",
                    Style::default().fg(theme::DIM_TEXT),
                ),
            ]
        } else if self.loading {
            vec![Line::from(format!(
                "Loading repositories for @{}\u{2026}",
                self.config.username
            ))]
        } else if !self.filter_text.is_empty() {
            vec![Line::from(format!(
                "No cards match \"{}\".",
                self.filter_text
            ))]
        } else {
            vec![Line::from("No repositories to show.")]
        }
    }

    fn ensure_scroll_bounds(&mut self, rows_visible: usize, vis_len: usize) {
        if vis_len == 0 {
            self.scroll_row = 0;
            return;
        }
        let cols = self.grid_cols.max(1);
        let row = self.selected / cols;
        if row >= self.scroll_row + rows_visible {
            self.scroll_row = row + 1 - rows_visible;
        }
        if row < self.scroll_row {
            self.scroll_row = row;
        }
    }
}

fn filter_matches(card: &RepoCard, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    card.name.to_lowercase().contains(query)
        || card
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
        || card
            .language
            .as_deref()
            .is_some_and(|l| l.to_lowercase().contains(query))
}

fn lowered(area: Rect) -> Rect {
    let y_off = area.height / 3;
    Rect {
        y: area.y + y_off,
        height: area.height - y_off,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn app_with(repos: Vec<RepoCard>, pins: &[&str]) -> App {
        let config = Config {
            username: "someone".to_string(),
            ..Config::default()
        };
        let mut app = App::new(config).unwrap();
        let pins: Vec<String> = pins.iter().map(|p| p.to_string()).collect();
        app.portfolio = order::prioritize(repos, &pins);
        app
    }

    fn visible_names(app: &App) -> Vec<String> {
        app.visible_cards()
            .iter()
            .map(|c| c.repo.name.clone())
            .collect()
    }

    #[tokio::test]
    async     fn display_limit_truncates_cards() {
        let repos = (0..20).map(|i| make_card(&format!("repo{i}"), i, 1)).collect();
        let mut app = app_with(repos, &[]);
        app.config.display_limit = 5;
        assert_eq!(app.visible_cards().len(), 5);
    }

    #[tokio::test]
    async     fn filter_narrows_by_name() {
        let mut app = app_with(
            vec![
                make_card("folio", 3, 1),
                make_card("weather", 2, 1),
                make_card("folio-site", 1, 1),
            ],
            &[],
        );
        app.filter_text = "folio".to_string();
        assert_eq!(visible_names(&app), vec!["folio", "folio-site"]);
    }

    #[tokio::test]
    async     fn pinned_flag_set_on_prefix_only() {
        let app = app_with(
            vec![make_card("a", 9, 1), make_card("b", 1, 1)],
            &["b"],
        );
        let cards = app.visible_cards();
        assert!(cards[0].pinned);
        assert!(!cards[1].pinned);
    }

    #[tokio::test]
    async     fn selection_clamps_to_grid() {
        let mut app = app_with(
            vec![
                make_card("a", 3, 1),
                make_card("b", 2, 1),
                make_card("c", 1, 1),
            ],
            &[],
        );
        app.move_selection(10);
        assert_eq!(app.selected, 2);
        app.move_selection(-10);
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async     fn fetch_error_keeps_stale_cards() {
        let mut app = app_with(vec![make_card("kept", 1, 1)], &[]);
        app.apply_result(Err("boom".to_string()));
        assert_eq!(visible_names(&app), vec!["kept"]);
        assert!(app.load_error.is_none());
        assert!(!app.notifications.is_empty());
    }

    #[tokio::test]
    async     fn fetch_error_with_nothing_loaded_shows_error_state() {
        let mut app = app_with(Vec::new(), &[]);
        app.apply_result(Err("offline".to_string()));
        assert_eq!(app.load_error.as_deref(), Some("offline"));
    }

    #[tokio::test]
    async     fn fetch_success_replaces_portfolio() {
        let mut app = app_with(vec![make_card("old", 1, 1)], &[]);
        app.loading = true;
        app.apply_result(Ok(PortfolioData {
            repos: vec![make_card("new", 2, 1)],
            pins: Vec::new(),
            rate_limit: Some(58),
        }));
        assert!(!app.loading);
        assert_eq!(visible_names(&app), vec!["new"]);
        assert_eq!(app.rate_limit, Some(58));
        assert!(app.last_sync.is_some());
    }
}
