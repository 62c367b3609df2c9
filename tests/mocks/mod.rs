//! Test doubles for the repository and publisher ports.
//!
//! Every double can share a [`Journal`] so a test can assert the order in
//! which a handler touched its collaborators.

#![allow(dead_code)]

mod mock_history_repository;
mod mock_resume_repository;
mod recording_publisher;

pub use mock_history_repository::MockHistoryRepository;
pub use mock_resume_repository::MockResumeRepository;
pub use recording_publisher::RecordingPublisher;

use std::sync::{Arc, Mutex};

/// Shared, ordered log of collaborator calls.
#[derive(Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
