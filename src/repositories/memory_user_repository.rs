use crate::clock::Clock;
use crate::domain::{Aggregate, User, UserId};
use crate::error::{RepositoryError, RepositoryResult};
use crate::models::UserReadModel;
use crate::repositories::traits::{Repository, UserReadRepository};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
struct UserRow {
    user: User,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn to_read_model(&self) -> Option<UserReadModel> {
        self.user.id().map(|id| UserReadModel {
            id: id.value(),
            name: self.user.name().to_string(),
            email: self.user.email().to_string(),
            created_at: self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<UserId, UserRow>,
    last_id: u64,
}

/// User storage backed by an in-process map.
///
/// Stamps `created_at` from the injected clock the first time a row is written.
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            table: RwLock::new(UserTable::default()),
            clock,
        }
    }
}

fn next_id(last_id: u64) -> RepositoryResult<u64> {
    last_id
        .checked_add(1)
        .ok_or_else(|| RepositoryError::Storage("id space exhausted".to_string()))
}

#[async_trait]
impl Repository<User> for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<User>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("user read"))?;
        Ok(table.rows.get(&id).map(|row| row.user.clone()))
    }

    async fn save(&self, user: &mut User) -> RepositoryResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("user write"))?;

        // Id 0 never names a stored row; it is inserted like an unsaved user
        let id = match Aggregate::id(user).filter(|id| id.value() != 0) {
            Some(id) => {
                table.last_id = table.last_id.max(id.value());
                id
            }
            None => {
                table.last_id = next_id(table.last_id)?;
                let id = UserId::from_u64(table.last_id);
                user.assign_id(id);
                id
            }
        };

        let created_at = table
            .rows
            .get(&id)
            .map(|row| row.created_at)
            .unwrap_or_else(|| self.clock.now());

        table.rows.insert(
            id,
            UserRow {
                user: user.clone(),
                created_at,
            },
        );
        Ok(())
    }

    async fn delete(&self, id: UserId) -> RepositoryResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("user write"))?;
        table.rows.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserReadRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepositoryResult<Option<UserReadModel>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("user read"))?;
        Ok(table.rows.get(&id).and_then(UserRow::to_read_model))
    }

    async fn list(&self, limit: usize, offset: usize) -> RepositoryResult<Vec<UserReadModel>> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("user read"))?;
        Ok(table
            .rows
            .values()
            .rev()
            .skip(offset)
            .take(limit)
            .filter_map(UserRow::to_read_model)
            .collect())
    }

    async fn count_all(&self) -> RepositoryResult<u64> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("user read"))?;
        Ok(table.rows.len() as u64)
    }
}
