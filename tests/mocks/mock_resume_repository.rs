use super::Journal;
use async_trait::async_trait;
use resume_core::domain::{Aggregate, Resume, ResumeId};
use resume_core::error::RepositoryResult;
use resume_core::repositories::Repository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock resume write repository.
///
/// Stores resumes in a map and tracks method calls for verification.
#[derive(Clone, Default)]
pub struct MockResumeRepository {
    resumes: Arc<Mutex<HashMap<u64, Resume>>>,
    next_id: Arc<Mutex<u64>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    journal: Journal,
}

impl MockResumeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            journal,
            ..Self::default()
        }
    }

    /// Seed a persisted resume.
    pub fn add_resume(&self, resume: Resume) {
        let id = resume.id().expect("seeded resume needs an id").value();
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(id);
        self.resumes.lock().unwrap().insert(id, resume);
    }

    pub fn get(&self, id: u64) -> Option<Resume> {
        self.resumes.lock().unwrap().get(&id).cloned()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
        self.journal.push(method);
    }
}

#[async_trait]
impl Repository<Resume> for MockResumeRepository {
    async fn find_by_id(&self, id: ResumeId) -> RepositoryResult<Option<Resume>> {
        self.track_call("find_by_id");
        Ok(self.get(id.value()))
    }

    async fn save(&self, resume: &mut Resume) -> RepositoryResult<()> {
        self.track_call("save");

        if resume.id().is_none() {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            resume.assign_id(ResumeId::from_u64(*next_id));
        }
        if let Some(id) = resume.id() {
            self.resumes.lock().unwrap().insert(id.value(), resume.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: ResumeId) -> RepositoryResult<()> {
        self.track_call("delete");
        self.resumes.lock().unwrap().remove(&id.value());
        Ok(())
    }
}
