//! Composition root.
//!
//! Wires repositories, the event dispatcher and the services together.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::events::{AuditLogSubscriber, EventDispatcher, EventPublisher, EventSubscriber};
use crate::handlers::{ResumeWriteContext, UserWriteContext};
use crate::observability::DispatchMetrics;
use crate::repositories::{InMemoryResumeRepository, InMemoryStatusHistory, InMemoryUserRepository};
use crate::services::{
    ResumeCommandService, ResumeCommandServiceImpl, ResumeQueryService, ResumeQueryServiceImpl,
    UserCommandService, UserCommandServiceImpl, UserQueryService, UserQueryServiceImpl,
};
use std::sync::Arc;
use tracing::info;

/// The assembled services.
pub struct App {
    pub resume_commands: Arc<dyn ResumeCommandService>,
    pub resume_queries: Arc<dyn ResumeQueryService>,
    pub user_commands: Arc<dyn UserCommandService>,
    pub user_queries: Arc<dyn UserQueryService>,
    pub metrics: DispatchMetrics,
}

/// Builder for an [`App`] backed by the in-memory repositories.
pub struct AppBuilder {
    config: Config,
    clock: Arc<dyn Clock>,
    subscribers: Vec<Arc<dyn EventSubscriber>>,
}

impl AppBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
            subscribers: Vec::new(),
        }
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Register an extra event subscriber, after the audit log.
    pub fn subscriber(mut self, subscriber: Arc<dyn EventSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    pub fn build(self) -> App {
        let metrics = DispatchMetrics::new();
        let mut dispatcher = EventDispatcher::with_metrics(metrics.clone());
        if self.config.audit_log_enabled {
            dispatcher.subscribe(Arc::new(AuditLogSubscriber));
        }
        for subscriber in self.subscribers {
            dispatcher.subscribe(subscriber);
        }
        info!(
            subscribers = dispatcher.subscriber_count(),
            "Event dispatcher ready"
        );
        let events: Arc<dyn EventPublisher> = Arc::new(dispatcher);

        let resumes = Arc::new(InMemoryResumeRepository::new());
        let users = Arc::new(InMemoryUserRepository::new(self.clock.clone()));
        let history = Arc::new(InMemoryStatusHistory::new());

        let resume_context =
            ResumeWriteContext::new(resumes.clone(), history.clone(), events.clone(), self.clock);
        let user_context = UserWriteContext::new(users.clone(), events);

        App {
            resume_commands: Arc::new(ResumeCommandServiceImpl::new(resume_context)),
            resume_queries: Arc::new(ResumeQueryServiceImpl::new(
                resumes,
                history,
                self.config.default_page_size,
                self.config.max_page_size,
            )),
            user_commands: Arc::new(UserCommandServiceImpl::new(user_context)),
            user_queries: Arc::new(UserQueryServiceImpl::new(
                users,
                self.config.default_page_size,
                self.config.max_page_size,
            )),
            metrics,
        }
    }
}

impl App {
    /// In-memory app with the system clock and the configured subscribers.
    pub fn in_memory(config: Config) -> Self {
        AppBuilder::new(config).build()
    }

    pub fn builder(config: Config) -> AppBuilder {
        AppBuilder::new(config)
    }
}
