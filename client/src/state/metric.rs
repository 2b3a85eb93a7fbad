//! Remote metric widget state (GitHub star count).
//!
//! DESIGN
//! ======
//! `MetricPhase` carries its payload, so a value exists only when `Ready` and
//! a message only when `Error`. `Loading` is the only phase that accepts a
//! result; `Ready` and `Error` are terminal for the mount.
//!
//! `fetch_started` latches the single outbound call. Components check it via
//! `begin_fetch` so re-running their setup never issues a second request.

#[cfg(test)]
#[path = "metric_test.rs"]
mod metric_test;

use crate::net::github::MetricError;

/// Lifecycle phase of one widget mount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MetricPhase {
    #[default]
    Loading,
    Ready {
        value: u64,
    },
    Error {
        message: String,
    },
}

/// State owned by one `GitHubStars` instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricState {
    pub phase: MetricPhase,
    fetch_started: bool,
}

impl MetricState {
    /// Claim the mount's single fetch. Returns `true` exactly once.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_started {
            return false;
        }
        self.fetch_started = true;
        true
    }

    /// Record the fetch outcome. Ignored unless still `Loading`.
    pub fn resolve(&mut self, result: Result<u64, MetricError>) {
        if self.phase != MetricPhase::Loading {
            return;
        }
        self.phase = match result {
            Ok(value) => MetricPhase::Ready { value },
            Err(e) => MetricPhase::Error { message: e.to_string() },
        };
    }
}
