//! Resolver metrics.
//!
//! Counters for refreshes, searches, issued tokens and change notifications.
//! Trackers are cheap to clone and share their counters, so the worker and
//! every handle can report into the same set.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared counters for one resolver.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    refreshes_total: Arc<AtomicU64>,
    refresh_failures_total: Arc<AtomicU64>,
    searches_total: Arc<AtomicU64>,
    tokens_issued_total: Arc<AtomicU64>,
    change_notifications_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            refreshes_total: Arc::new(AtomicU64::new(0)),
            refresh_failures_total: Arc::new(AtomicU64::new(0)),
            searches_total: Arc::new(AtomicU64::new(0)),
            tokens_issued_total: Arc::new(AtomicU64::new(0)),
            change_notifications_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed refresh attempt.
    pub fn track_refresh(&self, duration_ms: u128, contacts: usize, success: bool) {
        self.refreshes_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.refresh_failures_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            duration_ms = duration_ms,
            contacts = contacts,
            success = success,
            "Refresh completed"
        );
    }

    /// Track a completed search.
    pub fn track_search(&self, duration_ms: u128, result_count: usize, new_tokens: usize) {
        self.searches_total.fetch_add(1, Ordering::Relaxed);
        self.tokens_issued_total
            .fetch_add(new_tokens as u64, Ordering::Relaxed);

        tracing::debug!(
            duration_ms = duration_ms,
            result_count = result_count,
            new_tokens = new_tokens,
            "Search completed"
        );
    }

    pub fn track_change_notification(&self) {
        self.change_notifications_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn refreshes_total(&self) -> u64 {
        self.refreshes_total.load(Ordering::Relaxed)
    }

    pub fn refresh_failures_total(&self) -> u64 {
        self.refresh_failures_total.load(Ordering::Relaxed)
    }

    pub fn searches_total(&self) -> u64 {
        self.searches_total.load(Ordering::Relaxed)
    }

    pub fn tokens_issued_total(&self) -> u64 {
        self.tokens_issued_total.load(Ordering::Relaxed)
    }

    pub fn change_notifications_total(&self) -> u64 {
        self.change_notifications_total.load(Ordering::Relaxed)
    }

    /// Share of refresh attempts that failed (0.0 to 1.0).
    pub fn refresh_failure_rate(&self) -> f64 {
        let failures = self.refresh_failures_total() as f64;
        let total = self.refreshes_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            failures / total
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Refreshes: {}\n\
             Refresh Failures: {} ({:.2}% failure rate)\n\
             Searches: {}\n\
             Tokens Issued: {}\n\
             Change Notifications: {}",
            self.refreshes_total(),
            self.refresh_failures_total(),
            self.refresh_failure_rate() * 100.0,
            self.searches_total(),
            self.tokens_issued_total(),
            self.change_notifications_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
