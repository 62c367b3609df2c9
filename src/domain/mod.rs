//! Domain value objects, aggregates and services.
//!
//! Value objects validate at construction time, so an instance in hand is
//! always valid. Aggregates hold value objects and replace them wholesale
//! when mutated.

pub mod email;
pub mod entity_id;
pub mod errors;
pub mod name;
pub mod password_hash;
pub mod resume;
pub mod resume_status;
pub mod status_service;
pub mod user;

pub use email::Email;
pub use entity_id::EntityId;
pub use errors::ValidationError;
pub use name::Name;
pub use password_hash::PasswordHash;
pub use resume::{Resume, ResumeId};
pub use resume_status::ResumeStatus;
pub use status_service::ResumeStatusService;
pub use user::{User, UserId};

/// An entity persisted through a [`Repository`](crate::repositories::Repository).
pub trait Aggregate: Clone + Send + Sync + 'static {
    /// The id, or `None` while the entity has never been saved.
    fn id(&self) -> Option<EntityId<Self>>;

    /// Called by a repository when it persists the entity for the first time.
    fn assign_id(&mut self, id: EntityId<Self>);
}
