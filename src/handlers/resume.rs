//! Resume command handlers.
//!
//! Update and patch share one commit sequence: save, announce the update,
//! then, only when a supplied status differs from the one captured before
//! mutation, announce the status change and append to the history ledger.

use crate::clock::Clock;
use crate::commands::{
    CreateResumeCommand, DeleteResumeCommand, PatchResumeCommand, UpdateResumeCommand,
};
use crate::domain::{Resume, ResumeStatus, ResumeStatusService};
use crate::error::RepositoryResult;
use crate::events::{DomainEvent, EventPublisher};
use crate::repositories::{Repository, StatusHistoryRepository};
use std::sync::Arc;
use tracing::{debug, warn};

/// Collaborators shared by the resume command handlers.
#[derive(Clone)]
pub struct ResumeWriteContext {
    pub resumes: Arc<dyn Repository<Resume>>,
    pub history: Arc<dyn StatusHistoryRepository>,
    pub events: Arc<dyn EventPublisher>,
    pub clock: Arc<dyn Clock>,
}

impl ResumeWriteContext {
    pub fn new(
        resumes: Arc<dyn Repository<Resume>>,
        history: Arc<dyn StatusHistoryRepository>,
        events: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resumes,
            history,
            events,
            clock,
        }
    }

    async fn commit(
        &self,
        mut resume: Resume,
        previous_status: ResumeStatus,
        status_supplied: bool,
    ) -> RepositoryResult<Resume> {
        self.resumes.save(&mut resume).await?;
        self.events.publish(DomainEvent::updated(resume.clone()));

        let current_status = resume.status();
        if status_supplied && previous_status != current_status {
            self.events.publish(DomainEvent::status_changed(
                resume.clone(),
                previous_status,
                current_status,
            ));
            self.record_history(&resume, previous_status, current_status)
                .await;
        }

        Ok(resume)
    }

    /// Best-effort: the resume is already saved, so a ledger failure is only logged.
    async fn record_history(&self, resume: &Resume, from: ResumeStatus, to: ResumeStatus) {
        let Some(resume_id) = resume.id() else {
            debug!("Skipping status history for unpersisted resume");
            return;
        };

        if let Err(e) = self
            .history
            .record(resume_id, from, to, self.clock.now())
            .await
        {
            warn!(
                resume_id = %resume_id,
                from = %from,
                to = %to,
                error = %e,
                "Failed to record resume status history"
            );
        }
    }
}

pub struct CreateResumeHandler {
    context: ResumeWriteContext,
}

impl CreateResumeHandler {
    pub fn new(context: ResumeWriteContext) -> Self {
        Self { context }
    }

    pub async fn handle(&self, command: CreateResumeCommand) -> RepositoryResult<Resume> {
        let mut resume = Resume::new(
            command.name,
            command.email,
            command.status.unwrap_or_default(),
        );

        self.context.resumes.save(&mut resume).await?;
        debug!(resume_id = ?resume.id(), status = %resume.status(), "Resume created");

        self.context.events.publish(DomainEvent::created(resume.clone()));
        Ok(resume)
    }
}

/// Full update: name and email are always overwritten, status only when supplied.
pub struct UpdateResumeHandler {
    context: ResumeWriteContext,
    status_service: ResumeStatusService,
}

impl UpdateResumeHandler {
    pub fn new(context: ResumeWriteContext) -> Self {
        Self {
            context,
            status_service: ResumeStatusService::new(),
        }
    }

    /// Returns `Ok(None)` when no resume has the command's id.
    pub async fn handle(&self, command: UpdateResumeCommand) -> RepositoryResult<Option<Resume>> {
        let Some(mut resume) = self.context.resumes.find_by_id(command.id).await? else {
            debug!(resume_id = %command.id, "Resume not found for update");
            return Ok(None);
        };

        let previous_status = resume.status();
        resume.rename(command.name);
        resume.change_email(command.email);
        if let Some(status) = command.status {
            self.status_service.apply(&mut resume, status);
        }

        self.context
            .commit(resume, previous_status, command.status.is_some())
            .await
            .map(Some)
    }
}

/// Partial update: only the fields present in the command change.
pub struct PatchResumeHandler {
    context: ResumeWriteContext,
    status_service: ResumeStatusService,
}

impl PatchResumeHandler {
    pub fn new(context: ResumeWriteContext) -> Self {
        Self {
            context,
            status_service: ResumeStatusService::new(),
        }
    }

    /// Returns `Ok(None)` when no resume has the command's id.
    pub async fn handle(&self, command: PatchResumeCommand) -> RepositoryResult<Option<Resume>> {
        let Some(mut resume) = self.context.resumes.find_by_id(command.id).await? else {
            debug!(resume_id = %command.id, "Resume not found for patch");
            return Ok(None);
        };

        let previous_status = resume.status();
        if let Some(name) = command.name {
            resume.rename(name);
        }
        if let Some(email) = command.email {
            resume.change_email(email);
        }
        if let Some(status) = command.status {
            self.status_service.apply(&mut resume, status);
        }

        self.context
            .commit(resume, previous_status, command.status.is_some())
            .await
            .map(Some)
    }
}

pub struct DeleteResumeHandler {
    context: ResumeWriteContext,
}

impl DeleteResumeHandler {
    pub fn new(context: ResumeWriteContext) -> Self {
        Self { context }
    }

    /// Returns the deleted resume's last snapshot, or `Ok(None)` if it did not exist.
    pub async fn handle(&self, command: DeleteResumeCommand) -> RepositoryResult<Option<Resume>> {
        let Some(resume) = self.context.resumes.find_by_id(command.id).await? else {
            debug!(resume_id = %command.id, "Resume not found for delete");
            return Ok(None);
        };

        self.context.resumes.delete(command.id).await?;
        debug!(resume_id = %command.id, "Resume deleted");

        self.context.events.publish(DomainEvent::deleted(resume.clone()));
        Ok(Some(resume))
    }
}
