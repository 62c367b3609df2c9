//! Application service layer.
//!
//! Services are the entry point for the transport layer. They turn raw input
//! into commands and queries, so validation failures surface here before any
//! handler touches storage.

mod resume_service;
mod user_service;

pub use resume_service::{
    ResumeCommandService, ResumeCommandServiceImpl, ResumeQueryService, ResumeQueryServiceImpl,
};
pub use user_service::{
    UserCommandService, UserCommandServiceImpl, UserQueryService, UserQueryServiceImpl,
};
