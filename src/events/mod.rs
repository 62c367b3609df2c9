//! Domain events and their dispatch.
//!
//! Handlers receive an [`EventPublisher`] through their constructor; there is
//! no ambient, global event bus.

mod dispatcher;
mod event;
mod publisher;
mod subscribers;

pub use dispatcher::EventDispatcher;
pub use event::{DomainEvent, Resource};
pub use publisher::{EventPublisher, EventSubscriber, NoopPublisher, SubscriberError};
pub use subscribers::{AuditLogSubscriber, ChannelSubscriber};
