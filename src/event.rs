use crate::loader::PortfolioData;
use crossterm::event::KeyEvent;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    RefreshDue,
    Portfolio(Result<PortfolioData, String>),
}
