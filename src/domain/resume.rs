//! Resume aggregate.

use super::{Aggregate, Email, EntityId, Name, ResumeStatus};
use serde::Serialize;

/// Identifier of a [`Resume`].
pub type ResumeId = EntityId<Resume>;

/// A resume record.
///
/// `id` is `None` until the repository persists the resume for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resume {
    id: Option<ResumeId>,
    name: Name,
    email: Email,
    status: ResumeStatus,
}

impl Resume {
    /// Create a resume that has not been persisted yet.
    pub fn new(name: Name, email: Email, status: ResumeStatus) -> Self {
        Self {
            id: None,
            name,
            email,
            status,
        }
    }

    /// Rebuild a persisted resume, e.g. from a storage row.
    pub fn restore(id: ResumeId, name: Name, email: Email, status: ResumeStatus) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            status,
        }
    }

    pub fn id(&self) -> Option<ResumeId> {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn status(&self) -> ResumeStatus {
        self.status
    }

    pub fn rename(&mut self, name: Name) {
        self.name = name;
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }

    /// Replace the status. Callers go through
    /// [`ResumeStatusService`](crate::domain::ResumeStatusService).
    pub fn change_status(&mut self, status: ResumeStatus) {
        self.status = status;
    }
}

impl Aggregate for Resume {
    fn id(&self) -> Option<ResumeId> {
        self.id
    }

    fn assign_id(&mut self, id: ResumeId) {
        self.id = Some(id);
    }
}
