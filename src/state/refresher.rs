use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::time::interval;

/// Re-issues the live-data fetch for whatever the user is looking at.
/// Only Scores, Team and Game refresh on a timer; other views refresh on `r`.
pub struct PeriodicRefresher {
    app: Arc<Mutex<App>>,
    network_requests: mpsc::Sender<NetworkRequest>,
    every: Duration,
}

impl PeriodicRefresher {
    pub fn new(
        app: Arc<Mutex<App>>,
        network_requests: mpsc::Sender<NetworkRequest>,
        every: Duration,
    ) -> Self {
        Self { app, network_requests, every }
    }

    pub async fn run(self) {
        let mut ticker = interval(self.every);
        // Skip the immediate first tick so startup loading isn't double-triggered.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let request = {
                let mut guard = self.app.lock().await;
                match guard.state.active_tab {
                    MenuItem::Scores | MenuItem::Team | MenuItem::Game => guard.refresh_request(),
                    _ => None,
                }
            };
            if let Some(request) = request
                && self.network_requests.send(request).await.is_err()
            {
                break;
            }
        }
    }
}
