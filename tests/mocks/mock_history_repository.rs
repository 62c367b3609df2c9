use super::Journal;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resume_core::domain::{ResumeId, ResumeStatus};
use resume_core::error::{RepositoryError, RepositoryResult};
use resume_core::repositories::StatusHistoryRepository;
use std::sync::{Arc, Mutex};

/// One `record` call as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTransition {
    pub resume_id: u64,
    pub from: ResumeStatus,
    pub to: ResumeStatus,
    pub changed_at: DateTime<Utc>,
}

/// Mock status history ledger. Can be told to fail every write.
#[derive(Clone, Default)]
pub struct MockHistoryRepository {
    recorded: Arc<Mutex<Vec<RecordedTransition>>>,
    attempts: Arc<Mutex<usize>>,
    failing: bool,
    journal: Journal,
}

impl MockHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = journal;
        self
    }

    pub fn recorded(&self) -> Vec<RecordedTransition> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl StatusHistoryRepository for MockHistoryRepository {
    async fn record(
        &self,
        resume_id: ResumeId,
        from: ResumeStatus,
        to: ResumeStatus,
        changed_at: DateTime<Utc>,
    ) -> RepositoryResult<()> {
        *self.attempts.lock().unwrap() += 1;
        self.journal.push("history");

        if self.failing {
            return Err(RepositoryError::Storage("history table unavailable".to_string()));
        }

        self.recorded.lock().unwrap().push(RecordedTransition {
            resume_id: resume_id.value(),
            from,
            to,
            changed_at,
        });
        Ok(())
    }
}
