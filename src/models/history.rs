//! Status history read model.

use serde::{Deserialize, Serialize};

/// One row of a resume's status history ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeStatusHistoryReadModel {
    pub id: u64,
    pub resume_id: u64,
    pub from_status: String,
    pub to_status: String,
    /// When the transition was recorded (RFC 3339, UTC)
    pub changed_at: String,
}
