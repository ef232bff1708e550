mod app;
mod config;
mod error;
mod event;
mod github;
mod loader;
mod logging;
mod order;
mod pins;
mod poll;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Parser)]
#[command(name = "gitfolio", about = "Terminal GitHub portfolio viewer")]
struct Cli {
    #[arg(help = "GitHub username to showcase")]
    user: Option<String>,

    #[arg(long, short, help = "Path to a pins file (JSON array of repo names)")]
    pins: Option<PathBuf>,

    #[arg(long, short = 'n', help = "Max cards to display (0 = all)")]
    limit: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.user, cli.pins, cli.limit);

    if let Err(e) = logging::init(&config::config_dir().join("gitfolio")) {
        eprintln!("warning: log init failed: {e}");
    }

    let poll_interval = config.poll_interval_secs;
    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    spawn_fetch(&mut app, &tx);

    let mut poller: Option<JoinHandle<()>> = None;
    if poll_interval > 0 {
        let poll_tx = tx.clone();
        poller = Some(tokio::spawn(async move {
            poll::start_refresh_poller(poll_tx, poll_interval).await;
        }));
    }

    let input_tx = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        process_event(&mut app, first, &tx);
        while let Ok(pending) = rx.try_recv() {
            process_event(&mut app, pending, &tx);
        }

        if app.should_quit {
            break;
        }
    }

    if let Some(handle) = poller {
        handle.abort();
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn process_event(app: &mut App, event: AppEvent, tx: &mpsc::UnboundedSender<AppEvent>) {
    match event {
        AppEvent::RefreshDue => spawn_fetch(app, tx),
        other => {
            if app.handle_event(other) {
                spawn_fetch(app, tx);
            }
        }
    }
}

// A load already in flight wins; the event that asked again is dropped.
fn spawn_fetch(app: &mut App, tx: &mpsc::UnboundedSender<AppEvent>) {
    if app.loading {
        return;
    }
    app.loading = true;

    let client = app.client.clone();
    let pins_path = app.config.resolved_pins_path();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = loader::load_portfolio(&client, &pins_path)
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(AppEvent::Portfolio(result));
    });
}
