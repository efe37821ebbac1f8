use crate::models::{ViewModel, ViewState};
use crate::services::site_audit_service::compute::classify_with;
use crate::services::site_audit_service::pagespeed::PageSpeedClient;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Latest state of a live-update session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiveSnapshot {
    pub source_url: String,
    /// Generation of the fetch that produced `view`. 0 until the first success.
    pub generation: u64,
    /// Newest generation that has finished, successfully or not.
    pub settled_generation: u64,
    pub view: Option<ViewModel>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub failures: u64,
}

struct PollerInner {
    client: Arc<PageSpeedClient>,
    source_url: String,
    view_state: ViewState,
    next_generation: AtomicU64,
    tx: watch::Sender<LiveSnapshot>,
}

impl PollerInner {
    fn begin(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn poll_once(&self, generation: u64) -> bool {
        debug!("Live update #{} for {}", generation, self.source_url);
        match self.client.fetch(&self.source_url, None).await {
            Ok(report) => self.publish(generation, Ok(classify_with(&report, &self.view_state))),
            Err(err) => {
                warn!("Live update #{} for {} failed: {}", generation, self.source_url, err);
                self.publish(generation, Err(err.to_string()))
            }
        }
    }

    /// Applies a fetch outcome unless a newer generation has already settled.
    /// Failures keep the current view and only record the error.
    fn publish(&self, generation: u64, outcome: Result<ViewModel, String>) -> bool {
        self.tx.send_if_modified(|snapshot| {
            if generation <= snapshot.settled_generation {
                debug!(
                    "Dropping live update #{} for {}: #{} already settled",
                    generation, self.source_url, snapshot.settled_generation
                );
                return false;
            }
            snapshot.settled_generation = generation;
            match outcome {
                Ok(view) => {
                    snapshot.generation = generation;
                    snapshot.view = Some(view);
                    snapshot.updated_at = Some(Utc::now());
                    snapshot.last_error = None;
                }
                Err(message) => {
                    snapshot.last_error = Some(message);
                    snapshot.failures += 1;
                }
            }
            true
        })
    }
}

/// Re-fetches one source url on a fixed interval and keeps the newest view model.
///
/// Each fetch is stamped with a generation; a response that arrives after a
/// newer fetch has settled, successfully or not, is discarded. Dropping the poller stops it and
/// abandons any request still in flight.
pub struct LivePoller {
    inner: Arc<PollerInner>,
    task: JoinHandle<()>,
}

impl LivePoller {
    pub fn start(
        client: Arc<PageSpeedClient>,
        source_url: impl Into<String>,
        view_state: ViewState,
        interval: Duration,
        fetch_immediately: bool,
    ) -> Self {
        let source_url = source_url.into();
        let (tx, _rx) = watch::channel(LiveSnapshot {
            source_url: source_url.clone(),
            ..Default::default()
        });
        let inner = Arc::new(PollerInner {
            client,
            source_url,
            view_state,
            next_generation: AtomicU64::new(0),
            tx,
        });

        info!(
            "Live updates started for {} every {}s",
            inner.source_url,
            interval.as_secs()
        );
        let task = tokio::spawn(run(Arc::clone(&inner), interval, fetch_immediately));
        Self { inner, task }
    }

    pub fn source_url(&self) -> &str {
        &self.inner.source_url
    }

    pub fn subscribe(&self) -> watch::Receiver<LiveSnapshot> {
        self.inner.tx.subscribe()
    }

    pub fn snapshot(&self) -> LiveSnapshot {
        self.inner.tx.borrow().clone()
    }

    /// Fetches right away, superseding any poll still in flight.
    /// Returns whether the result was published.
    pub async fn refresh_now(&self) -> bool {
        let generation = self.inner.begin();
        self.inner.poll_once(generation).await
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for LivePoller {
    fn drop(&mut self) {
        self.task.abort();
        info!("Live updates stopped for {}", self.inner.source_url);
    }
}

async fn run(inner: Arc<PollerInner>, period: Duration, fetch_immediately: bool) {
    let start = if fetch_immediately {
        Instant::now()
    } else {
        Instant::now() + period
    };
    let mut ticker = time::interval_at(start, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // aborted along with this task
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let inner = Arc::clone(&inner);
                let generation = inner.begin();
                in_flight.spawn(async move {
                    inner.poll_once(generation).await;
                });
            }
            Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
        }
    }
}
