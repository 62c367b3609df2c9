mod memory_resume_repository;
mod memory_status_history;
mod memory_user_repository;
mod traits;

pub use memory_resume_repository::InMemoryResumeRepository;
pub use memory_status_history::InMemoryStatusHistory;
pub use memory_user_repository::InMemoryUserRepository;
pub use traits::{
    Repository, ResumeReadRepository, StatusHistoryReadRepository, StatusHistoryRepository,
    UserReadRepository,
};
