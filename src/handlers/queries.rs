//! Query handlers. They read projections only and never load aggregates.

use crate::error::RepositoryResult;
use crate::models::{Page, ResumeReadModel, ResumeStatusHistoryReadModel, UserReadModel};
use crate::queries::{
    GetResumeQuery, GetResumeStatusHistoryQuery, GetUserQuery, ListResumesQuery, ListUsersQuery,
};
use crate::repositories::{ResumeReadRepository, StatusHistoryReadRepository, UserReadRepository};
use std::sync::Arc;

pub struct GetResumeHandler {
    resumes: Arc<dyn ResumeReadRepository>,
}

impl GetResumeHandler {
    pub fn new(resumes: Arc<dyn ResumeReadRepository>) -> Self {
        Self { resumes }
    }

    pub async fn handle(&self, query: GetResumeQuery) -> RepositoryResult<Option<ResumeReadModel>> {
        self.resumes.find_by_id(query.id).await
    }
}

/// Lists resumes newest-first, capping the requested limit at `max_page_size`.
pub struct ListResumesHandler {
    resumes: Arc<dyn ResumeReadRepository>,
    max_page_size: usize,
}

impl ListResumesHandler {
    pub fn new(resumes: Arc<dyn ResumeReadRepository>, max_page_size: usize) -> Self {
        Self {
            resumes,
            max_page_size,
        }
    }

    pub async fn handle(&self, query: ListResumesQuery) -> RepositoryResult<Page<ResumeReadModel>> {
        let limit = query.limit.min(self.max_page_size);
        let items = self.resumes.list(limit, query.offset).await?;
        let total = self.resumes.count_all().await?;
        Ok(Page {
            items,
            total,
            limit,
            offset: query.offset,
        })
    }
}

/// Status history of one resume, oldest first.
pub struct GetResumeStatusHistoryHandler {
    resumes: Arc<dyn ResumeReadRepository>,
    history: Arc<dyn StatusHistoryReadRepository>,
}

impl GetResumeStatusHistoryHandler {
    pub fn new(
        resumes: Arc<dyn ResumeReadRepository>,
        history: Arc<dyn StatusHistoryReadRepository>,
    ) -> Self {
        Self { resumes, history }
    }

    /// `Ok(None)` when the resume itself does not exist.
    pub async fn handle(
        &self,
        query: GetResumeStatusHistoryQuery,
    ) -> RepositoryResult<Option<Vec<ResumeStatusHistoryReadModel>>> {
        if self.resumes.find_by_id(query.id).await?.is_none() {
            return Ok(None);
        }

        self.history.list_for_resume(query.id).await.map(Some)
    }
}

pub struct GetUserHandler {
    users: Arc<dyn UserReadRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserReadRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetUserQuery) -> RepositoryResult<Option<UserReadModel>> {
        self.users.find_by_id(query.id).await
    }
}

/// Lists users newest-first, capping the requested limit at `max_page_size`.
pub struct ListUsersHandler {
    users: Arc<dyn UserReadRepository>,
    max_page_size: usize,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserReadRepository>, max_page_size: usize) -> Self {
        Self {
            users,
            max_page_size,
        }
    }

    pub async fn handle(&self, query: ListUsersQuery) -> RepositoryResult<Page<UserReadModel>> {
        let limit = query.limit.min(self.max_page_size);
        let items = self.users.list(limit, query.offset).await?;
        let total = self.users.count_all().await?;
        Ok(Page {
            items,
            total,
            limit,
            offset: query.offset,
        })
    }
}
