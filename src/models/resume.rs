//! Resume read model.

use crate::domain::Resume;
use serde::{Deserialize, Serialize};

/// A resume as seen by the query side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeReadModel {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// One of `draft`, `published`, `archived`
    pub status: String,
}

impl ResumeReadModel {
    /// Project a persisted resume. Returns `None` for an unsaved one.
    pub fn from_resume(resume: &Resume) -> Option<Self> {
        resume.id().map(|id| Self {
            id: id.value(),
            name: resume.name().to_string(),
            email: resume.email().to_string(),
            status: resume.status().to_string(),
        })
    }
}
