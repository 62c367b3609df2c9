//! Resume service layer.
//!
//! Accepts raw input from the transport layer, builds commands and queries
//! (which validates it) and delegates to the handlers.

use crate::commands::{
    CreateResumeCommand, DeleteResumeCommand, PatchResumeCommand, UpdateResumeCommand,
};
use crate::domain::Resume;
use crate::error::CoreResult;
use crate::handlers::{
    CreateResumeHandler, DeleteResumeHandler, GetResumeHandler, GetResumeStatusHistoryHandler,
    ListResumesHandler, PatchResumeHandler, ResumeWriteContext, UpdateResumeHandler,
};
use crate::models::{Page, ResumeReadModel, ResumeStatusHistoryReadModel};
use crate::queries::{GetResumeQuery, GetResumeStatusHistoryQuery, ListResumesQuery};
use crate::repositories::{ResumeReadRepository, StatusHistoryReadRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Write operations on resumes.
#[async_trait]
pub trait ResumeCommandService: Send + Sync {
    /// Create a resume; `status` defaults to draft.
    async fn create(&self, name: &str, email: &str, status: Option<&str>) -> CoreResult<Resume>;

    /// Replace name and email, and the status when given.
    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        status: Option<&str>,
    ) -> CoreResult<Option<Resume>>;

    /// Change only the given fields.
    async fn patch(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        status: Option<&str>,
    ) -> CoreResult<Option<Resume>>;

    async fn delete(&self, id: i64) -> CoreResult<Option<Resume>>;
}

/// Read operations on resumes.
#[async_trait]
pub trait ResumeQueryService: Send + Sync {
    async fn get_by_id(&self, id: i64) -> CoreResult<Option<ResumeReadModel>>;

    /// Newest-first page; `limit` falls back to the default page size.
    async fn list(&self, limit: Option<usize>, offset: usize) -> CoreResult<Page<ResumeReadModel>>;

    /// `None` when the resume does not exist.
    async fn status_history(
        &self,
        id: i64,
    ) -> CoreResult<Option<Vec<ResumeStatusHistoryReadModel>>>;
}

/// Default implementation of ResumeCommandService.
pub struct ResumeCommandServiceImpl {
    create_handler: CreateResumeHandler,
    update_handler: UpdateResumeHandler,
    patch_handler: PatchResumeHandler,
    delete_handler: DeleteResumeHandler,
}

impl ResumeCommandServiceImpl {
    pub fn new(context: ResumeWriteContext) -> Self {
        Self {
            create_handler: CreateResumeHandler::new(context.clone()),
            update_handler: UpdateResumeHandler::new(context.clone()),
            patch_handler: PatchResumeHandler::new(context.clone()),
            delete_handler: DeleteResumeHandler::new(context),
        }
    }
}

#[async_trait]
impl ResumeCommandService for ResumeCommandServiceImpl {
    async fn create(&self, name: &str, email: &str, status: Option<&str>) -> CoreResult<Resume> {
        let command = CreateResumeCommand::parse(name, email, status)?;
        Ok(self.create_handler.handle(command).await?)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        status: Option<&str>,
    ) -> CoreResult<Option<Resume>> {
        let command = UpdateResumeCommand::parse(id, name, email, status)?;
        Ok(self.update_handler.handle(command).await?)
    }

    async fn patch(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        status: Option<&str>,
    ) -> CoreResult<Option<Resume>> {
        let command = PatchResumeCommand::parse(id, name, email, status)?;
        Ok(self.patch_handler.handle(command).await?)
    }

    async fn delete(&self, id: i64) -> CoreResult<Option<Resume>> {
        let command = DeleteResumeCommand::parse(id)?;
        Ok(self.delete_handler.handle(command).await?)
    }
}

/// Default implementation of ResumeQueryService.
pub struct ResumeQueryServiceImpl {
    get_handler: GetResumeHandler,
    list_handler: ListResumesHandler,
    history_handler: GetResumeStatusHistoryHandler,
    default_page_size: usize,
}

impl ResumeQueryServiceImpl {
    pub fn new(
        resumes: Arc<dyn ResumeReadRepository>,
        history: Arc<dyn StatusHistoryReadRepository>,
        default_page_size: usize,
        max_page_size: usize,
    ) -> Self {
        Self {
            get_handler: GetResumeHandler::new(resumes.clone()),
            list_handler: ListResumesHandler::new(resumes.clone(), max_page_size),
            history_handler: GetResumeStatusHistoryHandler::new(resumes, history),
            default_page_size,
        }
    }
}

#[async_trait]
impl ResumeQueryService for ResumeQueryServiceImpl {
    async fn get_by_id(&self, id: i64) -> CoreResult<Option<ResumeReadModel>> {
        let query = GetResumeQuery::parse(id)?;
        Ok(self.get_handler.handle(query).await?)
    }

    async fn list(&self, limit: Option<usize>, offset: usize) -> CoreResult<Page<ResumeReadModel>> {
        let query = ListResumesQuery {
            limit: limit.unwrap_or(self.default_page_size),
            offset,
        };
        Ok(self.list_handler.handle(query).await?)
    }

    async fn status_history(
        &self,
        id: i64,
    ) -> CoreResult<Option<Vec<ResumeStatusHistoryReadModel>>> {
        let query = GetResumeStatusHistoryQuery::parse(id)?;
        Ok(self.history_handler.handle(query).await?)
    }
}
