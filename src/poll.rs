use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;

pub async fn start_refresh_poller(tx: mpsc::UnboundedSender<AppEvent>, interval_secs: u64) {
    // 30s floor keeps an aggressive config from chewing the API quota
    let secs = interval_secs.max(30);
    let mut interval = tokio::time::interval(Duration::from_secs(secs));
    interval.tick().await;

    loop {
        interval.tick().await;
        if tx.send(AppEvent::RefreshDue).is_err() {
            break;
        }
    }
}
