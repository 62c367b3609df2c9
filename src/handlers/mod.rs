//! Command and query handlers, one per intent.
//!
//! Command handlers return `Ok(None)` when the target aggregate does not
//! exist; storage failures come back as `Err`.

mod queries;
mod resume;
mod user;

pub use queries::{
    GetResumeHandler, GetResumeStatusHistoryHandler, GetUserHandler, ListResumesHandler,
    ListUsersHandler,
};
pub use resume::{
    CreateResumeHandler, DeleteResumeHandler, PatchResumeHandler, ResumeWriteContext,
    UpdateResumeHandler,
};
pub use user::{
    CreateUserHandler, DeleteUserHandler, PatchUserHandler, UpdateUserHandler, UserWriteContext,
};
