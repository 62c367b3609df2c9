//! Event dispatch metrics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters for the event dispatcher.
///
/// Cloning shares the underlying counters.
#[derive(Debug, Clone, Default)]
pub struct DispatchMetrics {
    events_published_total: Arc<AtomicU64>,
    deliveries_total: Arc<AtomicU64>,
    subscriber_failures_total: Arc<AtomicU64>,
}

impl DispatchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track one event handed to the dispatcher.
    pub fn track_published(&self, event_name: &str) {
        self.events_published_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(event = %event_name, "Event published");
    }

    /// Track one delivery attempt to a subscriber.
    pub fn track_delivery(&self, subscriber: &str, success: bool) {
        self.deliveries_total.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.subscriber_failures_total.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(subscriber = %subscriber, "Subscriber delivery failed");
        }
    }

    pub fn events_published_total(&self) -> u64 {
        self.events_published_total.load(Ordering::Relaxed)
    }

    pub fn deliveries_total(&self) -> u64 {
        self.deliveries_total.load(Ordering::Relaxed)
    }

    pub fn subscriber_failures_total(&self) -> u64 {
        self.subscriber_failures_total.load(Ordering::Relaxed)
    }

    /// Snapshot of all counters.
    pub fn summary(&self) -> DispatchMetricsSummary {
        DispatchMetricsSummary {
            events_published_total: self.events_published_total(),
            deliveries_total: self.deliveries_total(),
            subscriber_failures_total: self.subscriber_failures_total(),
        }
    }
}

/// Point-in-time copy of [`DispatchMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DispatchMetricsSummary {
    pub events_published_total: u64,
    pub deliveries_total: u64,
    pub subscriber_failures_total: u64,
}
