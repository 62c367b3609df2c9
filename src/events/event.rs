//! Domain events emitted by command handlers.

use crate::domain::{Resume, ResumeStatus, User};
use serde::Serialize;

/// The aggregate an event is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Resource {
    Resume(Resume),
    User(User),
}

impl Resource {
    /// Short name of the aggregate kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Resume(_) => "resume",
            Resource::User(_) => "user",
        }
    }

    /// Raw id of the snapshot, if it has been persisted.
    pub fn id(&self) -> Option<u64> {
        match self {
            Resource::Resume(resume) => resume.id().map(|id| id.value()),
            Resource::User(user) => user.id().map(|id| id.value()),
        }
    }
}

impl From<Resume> for Resource {
    fn from(resume: Resume) -> Self {
        Resource::Resume(resume)
    }
}

impl From<User> for Resource {
    fn from(user: User) -> Self {
        Resource::User(user)
    }
}

/// Something that happened to an aggregate.
///
/// Each variant carries a snapshot of the aggregate taken right after the
/// mutation (or, for deletions, the last state before removal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DomainEvent {
    ResourceCreated { resource: Resource },
    ResourceUpdated { resource: Resource },
    ResourceDeleted { resource: Resource },
    StatusChanged {
        resume: Resume,
        from: ResumeStatus,
        to: ResumeStatus,
    },
}

impl DomainEvent {
    pub fn created(resource: impl Into<Resource>) -> Self {
        DomainEvent::ResourceCreated {
            resource: resource.into(),
        }
    }

    pub fn updated(resource: impl Into<Resource>) -> Self {
        DomainEvent::ResourceUpdated {
            resource: resource.into(),
        }
    }

    pub fn deleted(resource: impl Into<Resource>) -> Self {
        DomainEvent::ResourceDeleted {
            resource: resource.into(),
        }
    }

    pub fn status_changed(resume: Resume, from: ResumeStatus, to: ResumeStatus) -> Self {
        DomainEvent::StatusChanged { resume, from, to }
    }

    /// Stable event name used in logs and by subscribers filtering on kind.
    pub fn name(&self) -> &'static str {
        match self {
            DomainEvent::ResourceCreated { .. } => "resource_created",
            DomainEvent::ResourceUpdated { .. } => "resource_updated",
            DomainEvent::ResourceDeleted { .. } => "resource_deleted",
            DomainEvent::StatusChanged { .. } => "status_changed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Name, ResumeId};
    use serde_json::json;

    fn jane() -> Resume {
        Resume::restore(
            ResumeId::from_u64(1),
            Name::new("Jane Doe").unwrap(),
            Email::new("jane@x.com").unwrap(),
            ResumeStatus::Published,
        )
    }

    #[test]
    fn test_status_changed_payload() {
        let event = DomainEvent::status_changed(jane(), ResumeStatus::Draft, ResumeStatus::Published);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "status_changed");
        assert_eq!(json["from"], "draft");
        assert_eq!(json["to"], "published");
        assert_eq!(json["resume"]["id"], 1);
    }

    #[test]
    fn test_resource_payload_is_tagged() {
        let event = DomainEvent::deleted(jane());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            json!({
                "event": "resource_deleted",
                "resource": {
                    "type": "resume",
                    "data": {
                        "id": 1,
                        "name": "Jane Doe",
                        "email": "jane@x.com",
                        "status": "published"
                    }
                }
            })
        );
    }

    #[test]
    fn test_event_names() {
        assert_eq!(DomainEvent::created(jane()).name(), "resource_created");
        assert_eq!(DomainEvent::updated(jane()).name(), "resource_updated");
        assert_eq!(Resource::from(jane()).kind(), "resume");
        assert_eq!(Resource::from(jane()).id(), Some(1));
    }
}
