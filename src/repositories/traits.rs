use crate::domain::{Aggregate, EntityId, ResumeId, ResumeStatus, UserId};
use crate::error::RepositoryResult;
use crate::models::{ResumeReadModel, ResumeStatusHistoryReadModel, UserReadModel};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Write-side repository for one aggregate type.
///
/// Implementations decide the storage technology. Because the trait is
/// parameterised by the aggregate, a resume can never be saved through a
/// user repository.
#[async_trait]
pub trait Repository<E: Aggregate>: Send + Sync {
    /// Load an aggregate. `Ok(None)` when no row has this id.
    async fn find_by_id(&self, id: EntityId<E>) -> RepositoryResult<Option<E>>;

    /// Persist an aggregate.
    ///
    /// An aggregate without an id, or with id 0, is inserted and receives a
    /// freshly generated id; one with any other id overwrites the row with
    /// that key. Fails with `RepositoryError::Storage` once no fresh id is left.
    async fn save(&self, entity: &mut E) -> RepositoryResult<()>;

    /// Remove an aggregate. Deleting an absent id is not an error.
    async fn delete(&self, id: EntityId<E>) -> RepositoryResult<()>;
}

/// Query-side access to resumes.
#[async_trait]
pub trait ResumeReadRepository: Send + Sync {
    /// Retrieve a single resume projection.
    async fn find_by_id(&self, id: ResumeId) -> RepositoryResult<Option<ResumeReadModel>>;

    /// Retrieve resumes newest-first by id. A zero limit yields nothing.
    async fn list(&self, limit: usize, offset: usize) -> RepositoryResult<Vec<ResumeReadModel>>;

    /// Total number of resumes.
    async fn count_all(&self) -> RepositoryResult<u64>;
}

/// Query-side access to users.
#[async_trait]
pub trait UserReadRepository: Send + Sync {
    /// Retrieve a single user projection.
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<UserReadModel>>;

    /// Retrieve users newest-first by id. A zero limit yields nothing.
    async fn list(&self, limit: usize, offset: usize) -> RepositoryResult<Vec<UserReadModel>>;

    /// Total number of users.
    async fn count_all(&self) -> RepositoryResult<u64>;
}

/// Append-only ledger of resume status transitions.
///
/// Entries are never updated or removed.
#[async_trait]
pub trait StatusHistoryRepository: Send + Sync {
    /// Append one transition. Recording against id 0 is a silent no-op.
    async fn record(
        &self,
        resume_id: ResumeId,
        from: ResumeStatus,
        to: ResumeStatus,
        changed_at: DateTime<Utc>,
    ) -> RepositoryResult<()>;
}

/// Query-side access to the status history ledger.
#[async_trait]
pub trait StatusHistoryReadRepository: Send + Sync {
    /// Entries for one resume, oldest `changed_at` first.
    async fn list_for_resume(
        &self,
        resume_id: ResumeId,
    ) -> RepositoryResult<Vec<ResumeStatusHistoryReadModel>>;
}
