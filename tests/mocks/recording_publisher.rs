use super::Journal;
use resume_core::events::{DomainEvent, EventPublisher};
use std::sync::{Arc, Mutex};

/// Publisher that keeps every event it receives.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
    journal: Journal,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log each event name into `journal`.
    pub fn with_journal(journal: Journal) -> Self {
        Self {
            events: Arc::default(),
            journal,
        }
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().iter().map(|e| e.name()).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: DomainEvent) {
        self.journal.push(event.name());
        self.events.lock().unwrap().push(event);
    }
}
