use crate::error::Result;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to a file, not the terminal; the alternate screen owns
/// stdout/stderr while the TUI runs. Filter via GITFOLIO_LOG.
pub fn init(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let file = std::fs::File::create(dir.join("gitfolio.log"))?;

    let filter =
        EnvFilter::try_from_env("GITFOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .compact()
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
