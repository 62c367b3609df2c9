//! Queries: read-only requests answered from read models.

use crate::domain::{ResumeId, UserId, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetResumeQuery {
    pub id: ResumeId,
}

impl GetResumeQuery {
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ResumeId::new(id)?,
        })
    }
}

/// A window over resumes, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListResumesQuery {
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetResumeStatusHistoryQuery {
    pub id: ResumeId,
}

impl GetResumeStatusHistoryQuery {
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ResumeId::new(id)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetUserQuery {
    pub id: UserId,
}

impl GetUserQuery {
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            id: UserId::new(id)?,
        })
    }
}

/// A window over users, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListUsersQuery {
    pub limit: usize,
    pub offset: usize,
}
