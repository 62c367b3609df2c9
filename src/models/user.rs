//! User read model.

use serde::{Deserialize, Serialize};

/// A user as seen by the query side. The password hash is never projected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserReadModel {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// When the user was first persisted (RFC 3339)
    pub created_at: String,
}
