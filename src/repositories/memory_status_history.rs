use crate::domain::{ResumeId, ResumeStatus};
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::ResumeStatusHistoryReadModel;
use crate::repositories::traits::{StatusHistoryReadRepository, StatusHistoryRepository};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use std::sync::RwLock;

#[derive(Debug, Clone)]
struct HistoryRow {
    id: u64,
    resume_id: ResumeId,
    from: ResumeStatus,
    to: ResumeStatus,
    changed_at: DateTime<Utc>,
}

impl HistoryRow {
    fn to_read_model(&self) -> ResumeStatusHistoryReadModel {
        ResumeStatusHistoryReadModel {
            id: self.id,
            resume_id: self.resume_id.value(),
            from_status: self.from.to_string(),
            to_status: self.to.to_string(),
            changed_at: self.changed_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Append-only status history kept in memory.
#[derive(Debug, Default)]
pub struct InMemoryStatusHistory {
    rows: RwLock<Vec<HistoryRow>>,
}

impl InMemoryStatusHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded transitions across all resumes.
    pub fn len(&self) -> RepositoryResult<usize> {
        let rows = self
            .rows
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("history read"))?;
        Ok(rows.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        self.len().map(|len| len == 0)
    }
}

#[async_trait]
impl StatusHistoryRepository for InMemoryStatusHistory {
    async fn record(
        &self,
        resume_id: ResumeId,
        from: ResumeStatus,
        to: ResumeStatus,
        changed_at: DateTime<Utc>,
    ) -> RepositoryResult<()> {
        // Unpersisted resumes have nothing to attach history to.
        if resume_id.value() == 0 {
            return Ok(());
        }

        let mut rows = self
            .rows
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("history write"))?;
        let id = rows.len() as u64 + 1;
        rows.push(HistoryRow {
            id,
            resume_id,
            from,
            to,
            changed_at,
        });
        Ok(())
    }
}

#[async_trait]
impl StatusHistoryReadRepository for InMemoryStatusHistory {
    async fn list_for_resume(
        &self,
        resume_id: ResumeId,
    ) -> RepositoryResult<Vec<ResumeStatusHistoryReadModel>> {
        if resume_id.value() == 0 {
            return Ok(Vec::new());
        }

        let rows = self
            .rows
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("history read"))?;

        let mut entries: Vec<&HistoryRow> =
            rows.iter().filter(|row| row.resume_id == resume_id).collect();
        entries.sort_by(|a, b| a.changed_at.cmp(&b.changed_at).then(a.id.cmp(&b.id)));

        Ok(entries.into_iter().map(HistoryRow::to_read_model).collect())
    }
}
