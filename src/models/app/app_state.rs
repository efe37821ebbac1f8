use crate::config::Config;
use crate::services::{LivePoller, PageSpeedClient};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<PageSpeedClient>,
    // at most one live poller per process
    pub live: Arc<Mutex<Option<LivePoller>>>,
}

impl AppState {
    pub fn new(config: Config, client: PageSpeedClient) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
            live: Arc::new(Mutex::new(None)),
        }
    }
}
