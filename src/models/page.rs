//! Paged query results.

use serde::{Deserialize, Serialize};

/// A window of read models plus the total row count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    /// Whether rows exist past this window.
    pub fn has_more(&self) -> bool {
        (self.offset + self.items.len()) < self.total as usize
    }
}
