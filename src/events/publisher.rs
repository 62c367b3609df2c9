//! Outbound ports for domain events.

use super::event::DomainEvent;
use thiserror::Error;

/// Error returned by a subscriber that could not handle an event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{subscriber} failed to handle event: {reason}")]
pub struct SubscriberError {
    pub subscriber: String,
    pub reason: String,
}

impl SubscriberError {
    pub fn new(subscriber: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            subscriber: subscriber.into(),
            reason: reason.into(),
        }
    }
}

/// Port through which handlers announce domain events.
///
/// Publishing is fire-and-forget: implementations must not fail or block the
/// caller on account of what consumers do with the event.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: DomainEvent);
}

/// A consumer of domain events (audit log, notifications, projections).
pub trait EventSubscriber: Send + Sync {
    /// Name used in logs when the subscriber fails.
    fn name(&self) -> &str;

    fn handle(&self, event: &DomainEvent) -> Result<(), SubscriberError>;
}

/// Publisher that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: DomainEvent) {}
}
