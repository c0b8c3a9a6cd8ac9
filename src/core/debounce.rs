//! Settle a stream of search inputs before fetching.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    settle: Duration,
    pending: Option<(String, Instant)>,
    last_emitted: Option<String>,
}

impl SearchDebouncer {
    pub fn new(settle: Duration) -> Self {
        Self {
            settle,
            pending: None,
            last_emitted: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Record the latest input; restarts the settle window.
    pub fn push(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into().trim().to_string(), now));
    }

    /// Emit the pending query once the window has elapsed since the last push.
    ///
    /// A query equal to the previously emitted one is swallowed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = match &self.pending {
            Some((_, at)) => now.saturating_duration_since(*at) >= self.settle,
            None => false,
        };
        if !due {
            return None;
        }
        self.flush()
    }

    /// Emit the pending query immediately.
    pub fn flush(&mut self) -> Option<String> {
        let (query, _) = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(query.as_str()) {
            return None;
        }
        self.last_emitted = Some(query.clone());
        Some(query)
    }

    /// Let the last emitted query fire again, e.g. after its fetch failed.
    pub fn forget_last(&mut self) {
        self.last_emitted = None;
    }

    /// How long an event loop may sleep before the next `poll` can fire.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| self.settle.saturating_sub(now.saturating_duration_since(*at)))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
