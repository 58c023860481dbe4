//! Periodic refresh of server data.
//!
//! A [`Poller`] fetches once immediately and then once per interval until
//! its shutdown future resolves. Every fetch produces a [`LoadState`];
//! failures are reported and the loop keeps going.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

/// Refresh interval for vehicle locations and the vehicle list.
pub const LOCATIONS_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Refresh interval for the latest events.
pub const EVENTS_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Outcome of one refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            LoadState::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Poller {
    interval: Duration,
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run until `shutdown` resolves, returning the number of completed fetches.
    ///
    /// A fetch still in flight when `shutdown` resolves is dropped and its
    /// result is never delivered. Ticks missed while a slow fetch runs are
    /// delayed rather than replayed in a burst.
    pub async fn run<T, E, F, Fut, U, S>(&self, mut fetch: F, mut on_update: U, shutdown: S) -> usize
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
        U: FnMut(LoadState<T>),
        S: Future<Output = ()>,
    {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut fetches = 0;

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = ticker.tick() => {}
            }

            let state = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::debug!("shutdown during fetch, abandoning it");
                    break;
                }
                result = fetch() => LoadState::from_result(result),
            };

            if let LoadState::Failed(message) = &state {
                tracing::warn!(error = %message, "refresh failed");
            }

            fetches += 1;
            on_update(state);
        }

        fetches
    }
}
