//! Read models.
//!
//! Flat, behaviour-free projections of persisted state, consumed by the
//! presentation layer. They carry primitives only and never reference
//! domain types.

pub mod history;
pub mod page;
pub mod resume;
pub mod user;

pub use history::ResumeStatusHistoryReadModel;
pub use page::Page;
pub use resume::ResumeReadModel;
pub use user::UserReadModel;
