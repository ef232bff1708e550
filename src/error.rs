use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitfolioError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rate limited: {0}")]
    RateLimited(String),
}

pub type Result<T> = std::result::Result<T, GitfolioError>;
