//! Resume Core - command/query orchestration for resume and user records.
//!
//! Write requests travel as commands through handlers that load an aggregate,
//! mutate it, persist it, announce what happened and append resume status
//! transitions to a history ledger. Read requests go straight to flat read
//! models.
//!
//! # Architecture
//!
//! - **domain**: Value objects, the `Resume` and `User` aggregates, status service
//! - **commands** / **queries**: Validated intent objects
//! - **handlers**: One handler per command or query
//! - **repositories**: Write, read and history contracts plus in-memory stores
//! - **events**: Domain events, publisher port, isolating dispatcher
//! - **services**: Raw-input entry points used by the transport layer
//! - **models**: Read models
//! - **config** / **error** / **observability**: Ambient concerns
//! - **app**: Wiring

pub mod app;
pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod queries;
pub mod repositories;
pub mod services;

pub use app::{App, AppBuilder};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use domain::{Resume, ResumeId, ResumeStatus, User, UserId, ValidationError};
pub use error::{ConfigError, CoreError, RepositoryError};
pub use events::{DomainEvent, EventDispatcher, EventPublisher, EventSubscriber, Resource};
pub use models::{Page, ResumeReadModel, ResumeStatusHistoryReadModel, UserReadModel};
