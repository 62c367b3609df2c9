//! Built-in event subscribers.

use super::event::DomainEvent;
use super::publisher::{EventSubscriber, SubscriberError};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::info;

/// Writes every event to the `audit` tracing target as structured JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuditLogSubscriber;

impl AuditLogSubscriber {
    pub const NAME: &'static str = "audit_log";
}

impl EventSubscriber for AuditLogSubscriber {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), SubscriberError> {
        let payload = serde_json::to_string(event)
            .map_err(|e| SubscriberError::new(Self::NAME, e.to_string()))?;

        info!(target: "audit", event = %event.name(), payload = %payload, "Domain event");
        Ok(())
    }
}

/// Forwards events into a tokio channel for asynchronous consumers such as
/// notification senders or projection rebuilders.
///
/// Sending never waits. A closed receiver is reported as a subscriber error.
/// The [`channel`](Self::channel) queue is unbounded and grows for as long as
/// the receiver falls behind; use [`bounded`](Self::bounded) to cap it, in
/// which case an event that finds the queue full is dropped and reported.
#[derive(Debug, Clone)]
pub struct ChannelSubscriber {
    name: String,
    sender: ChannelSender,
}

#[derive(Debug, Clone)]
enum ChannelSender {
    Unbounded(mpsc::UnboundedSender<DomainEvent>),
    Bounded(mpsc::Sender<DomainEvent>),
}

impl ChannelSubscriber {
    pub fn new(name: impl Into<String>, sender: mpsc::UnboundedSender<DomainEvent>) -> Self {
        Self {
            name: name.into(),
            sender: ChannelSender::Unbounded(sender),
        }
    }

    /// Wrap a bounded sender. Full-queue sends fail instead of waiting.
    pub fn with_bounded_sender(name: impl Into<String>, sender: mpsc::Sender<DomainEvent>) -> Self {
        Self {
            name: name.into(),
            sender: ChannelSender::Bounded(sender),
        }
    }

    /// Create a subscriber together with the receiving end of an unbounded channel.
    pub fn channel(name: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<DomainEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(name, sender), receiver)
    }

    /// Create a subscriber whose channel holds at most `capacity` events (minimum 1).
    pub fn bounded(name: impl Into<String>, capacity: usize) -> (Self, mpsc::Receiver<DomainEvent>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self::with_bounded_sender(name, sender), receiver)
    }
}

impl EventSubscriber for ChannelSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn handle(&self, event: &DomainEvent) -> Result<(), SubscriberError> {
        match &self.sender {
            ChannelSender::Unbounded(sender) => sender
                .send(event.clone())
                .map_err(|_| SubscriberError::new(self.name.clone(), "receiver dropped")),
            ChannelSender::Bounded(sender) => {
                sender.try_send(event.clone()).map_err(|e| match e {
                    TrySendError::Full(_) => {
                        SubscriberError::new(self.name.clone(), "channel full, event dropped")
                    }
                    TrySendError::Closed(_) => {
                        SubscriberError::new(self.name.clone(), "receiver dropped")
                    }
                })
            }
        }
    }
}
