//! Fan-out of domain events to subscribers.

use super::event::DomainEvent;
use super::publisher::{EventPublisher, EventSubscriber};
use crate::observability::DispatchMetrics;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{error, warn};

/// Delivers each published event to every registered subscriber, in
/// registration order.
///
/// Every delivery runs in its own failure domain: a subscriber that returns
/// an error or panics is logged and counted, and the remaining subscribers
/// still receive the event.
#[derive(Default)]
pub struct EventDispatcher {
    subscribers: Vec<Arc<dyn EventSubscriber>>,
    metrics: DispatchMetrics,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `metrics` instead of a private set of counters.
    pub fn with_metrics(metrics: DispatchMetrics) -> Self {
        Self {
            subscribers: Vec::new(),
            metrics,
        }
    }

    pub fn subscribe(&mut self, subscriber: Arc<dyn EventSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Builder-style [`subscribe`](Self::subscribe).
    pub fn with_subscriber(mut self, subscriber: Arc<dyn EventSubscriber>) -> Self {
        self.subscribe(subscriber);
        self
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    fn deliver(&self, subscriber: &dyn EventSubscriber, event: &DomainEvent) -> bool {
        match panic::catch_unwind(AssertUnwindSafe(|| subscriber.handle(event))) {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                warn!(
                    subscriber = %subscriber.name(),
                    event = %event.name(),
                    error = %e,
                    "Event subscriber failed"
                );
                false
            }
            Err(_) => {
                error!(
                    subscriber = %subscriber.name(),
                    event = %event.name(),
                    "Event subscriber panicked"
                );
                false
            }
        }
    }
}

impl EventPublisher for EventDispatcher {
    fn publish(&self, event: DomainEvent) {
        self.metrics.track_published(event.name());
        for subscriber in &self.subscribers {
            let delivered = self.deliver(subscriber.as_ref(), &event);
            self.metrics.track_delivery(subscriber.name(), delivered);
        }
    }
}
