use crate::domain::{Aggregate, Resume, ResumeId};
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::ResumeReadModel;
use crate::repositories::traits::{Repository, ResumeReadRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct ResumeTable {
    rows: BTreeMap<ResumeId, Resume>,
    last_id: u64,
}

/// Resume storage backed by an in-process map.
///
/// Serves both the write side ([`Repository<Resume>`]) and the read side
/// ([`ResumeReadRepository`]); every read sees the state left by the last
/// completed write.
#[derive(Debug, Default)]
pub struct InMemoryResumeRepository {
    table: RwLock<ResumeTable>,
}

impl InMemoryResumeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(last_id: u64) -> RepositoryResult<u64> {
    last_id
        .checked_add(1)
        .ok_or_else(|| RepositoryError::Storage("id space exhausted".to_string()))
}

#[async_trait]
impl Repository<Resume> for InMemoryResumeRepository {
    async fn find_by_id(&self, id: ResumeId) -> RepositoryResult<Option<Resume>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("resume read"))?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, resume: &mut Resume) -> RepositoryResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("resume write"))?;

        // Id 0 never names a stored row; it is inserted like an unsaved resume
        let id = match Aggregate::id(resume).filter(|id| id.value() != 0) {
            Some(id) => {
                table.last_id = table.last_id.max(id.value());
                id
            }
            None => {
                table.last_id = next_id(table.last_id)?;
                let id = ResumeId::from_u64(table.last_id);
                resume.assign_id(id);
                id
            }
        };

        table.rows.insert(id, resume.clone());
        Ok(())
    }

    async fn delete(&self, id: ResumeId) -> RepositoryResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("resume write"))?;
        table.rows.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ResumeReadRepository for InMemoryResumeRepository {
    async fn find_by_id(&self, id: ResumeId) -> RepositoryResult<Option<ResumeReadModel>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("resume read"))?;
        Ok(table.rows.get(&id).and_then(ResumeReadModel::from_resume))
    }

    async fn list(&self, limit: usize, offset: usize) -> RepositoryResult<Vec<ResumeReadModel>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("resume read"))?;
        Ok(table
            .rows
            .values()
            .rev()
            .skip(offset)
            .take(limit)
            .filter_map(ResumeReadModel::from_resume)
            .collect())
    }

    async fn count_all(&self) -> RepositoryResult<u64> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("resume read"))?;
        Ok(table.rows.len() as u64)
    }
}
