use chrono::{Duration, TimeZone, Utc};
use resume_core::clock::ManualClock;
use resume_core::events::{ChannelSubscriber, DomainEvent, EventSubscriber, SubscriberError};
use resume_core::{App, Config, CoreError, ValidationError};
use std::sync::Arc;

fn quiet_config() -> Config {
    Config {
        audit_log_enabled: false,
        ..Config::default()
    }
}

struct RejectingSubscriber;

impl EventSubscriber for RejectingSubscriber {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn handle(&self, _event: &DomainEvent) -> Result<(), SubscriberError> {
        Err(SubscriberError::new("rejecting", "mailer offline"))
    }
}

struct PanickingSubscriber;

impl EventSubscriber for PanickingSubscriber {
    fn name(&self) -> &str {
        "panicking"
    }

    fn handle(&self, _event: &DomainEvent) -> Result<(), SubscriberError> {
        panic!("subscriber bug");
    }
}

#[tokio::test]
async fn test_full_resume_lifecycle() {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let (subscriber, mut events) = ChannelSubscriber::channel("test");
    let app = App::builder(quiet_config())
        .clock(clock.clone())
        .subscriber(Arc::new(subscriber))
        .build();

    let created = app
        .resume_commands
        .create("Jane Doe", "jane@x.com", None)
        .await
        .unwrap();
    let id = created.id().unwrap().value() as i64;

    clock.advance(Duration::minutes(5));
    app.resume_commands
        .patch(id, None, None, Some("published"))
        .await
        .unwrap()
        .unwrap();
    clock.advance(Duration::minutes(5));
    app.resume_commands
        .patch(id, None, None, Some("published"))
        .await
        .unwrap()
        .unwrap();

    let model = app.resume_queries.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(model.name, "Jane Doe");
    assert_eq!(model.status, "published");

    let history = app.resume_queries.status_history(id).await.unwrap().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].from_status, "draft");
    assert_eq!(history[0].to_status, "published");
    assert!(history[0].changed_at.starts_with("2024-05-01T08:05:00"));

    let deleted = app.resume_commands.delete(id).await.unwrap().unwrap();
    assert_eq!(deleted.id(), created.id());
    assert!(app.resume_queries.get_by_id(id).await.unwrap().is_none());
    assert!(app.resume_queries.status_history(id).await.unwrap().is_none());

    let mut names = Vec::new();
    while let Ok(event) = events.try_recv() {
        names.push(event.name());
    }
    assert_eq!(
        names,
        vec![
            "resource_created",
            "resource_updated",
            "status_changed",
            "resource_updated",
            "resource_deleted"
        ]
    );
}

#[tokio::test]
async fn test_history_sorted_by_change_time() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));
    let app = App::builder(quiet_config()).clock(clock.clone()).build();
    let id = app
        .resume_commands
        .create("Jane Doe", "jane@x.com", None)
        .await
        .unwrap()
        .id()
        .unwrap()
        .value() as i64;

    app.resume_commands
        .patch(id, None, None, Some("published"))
        .await
        .unwrap();
    // Recorded later, but stamped earlier
    clock.set(Utc.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap());
    app.resume_commands
        .patch(id, None, None, Some("archived"))
        .await
        .unwrap();

    let history = app.resume_queries.status_history(id).await.unwrap().unwrap();
    let transitions: Vec<(&str, &str)> = history
        .iter()
        .map(|h| (h.from_status.as_str(), h.to_status.as_str()))
        .collect();
    assert_eq!(
        transitions,
        vec![("published", "archived"), ("draft", "published")]
    );
}

#[tokio::test]
async fn test_failing_subscribers_do_not_fail_commands() {
    let (subscriber, mut events) = ChannelSubscriber::channel("after");
    let app = App::builder(quiet_config())
        .subscriber(Arc::new(RejectingSubscriber))
        .subscriber(Arc::new(PanickingSubscriber))
        .subscriber(Arc::new(subscriber))
        .build();

    let created = app
        .resume_commands
        .create("Jane Doe", "jane@x.com", Some("draft"))
        .await
        .unwrap();
    assert!(created.id().is_some());

    assert_eq!(events.try_recv().unwrap().name(), "resource_created");
    let summary = app.metrics.summary();
    assert_eq!(summary.events_published_total, 1);
    assert_eq!(summary.deliveries_total, 3);
    assert_eq!(summary.subscriber_failures_total, 2);
}

#[tokio::test]
async fn test_invalid_input_is_rejected() {
    let app = App::in_memory(quiet_config());

    assert_eq!(
        app.resume_commands
            .create("   ", "jane@x.com", None)
            .await
            .unwrap_err(),
        CoreError::Validation(ValidationError::EmptyName)
    );
    assert!(matches!(
        app.resume_commands
            .create("Jane", "jane@x.com", Some("deleted"))
            .await,
        Err(CoreError::Validation(ValidationError::InvalidStatus(_)))
    ));
    assert!(matches!(
        app.resume_commands.patch(1, None, Some("nope"), None).await,
        Err(CoreError::Validation(ValidationError::InvalidEmail(_)))
    ));
    assert_eq!(app.resume_queries.list(None, 0).await.unwrap().total, 0);
}

#[tokio::test]
async fn test_list_pages_newest_first_and_clamps_limit() {
    let config = Config {
        default_page_size: 2,
        max_page_size: 3,
        ..quiet_config()
    };
    let app = App::in_memory(config);
    for name in ["One", "Two", "Three", "Four", "Five"] {
        app.resume_commands
            .create(name, "r@example.com", None)
            .await
            .unwrap();
    }

    let first = app.resume_queries.list(None, 0).await.unwrap();
    let names: Vec<&str> = first.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Five", "Four"]);
    assert_eq!(first.total, 5);
    assert!(first.has_more());

    let clamped = app.resume_queries.list(Some(50), 3).await.unwrap();
    assert_eq!(clamped.limit, 3);
    assert_eq!(clamped.items.len(), 2);
    assert!(!clamped.has_more());
}

#[tokio::test]
async fn test_user_lifecycle() {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
    ));
    let (subscriber, mut events) = ChannelSubscriber::channel("users");
    let app = App::builder(quiet_config())
        .clock(clock.clone())
        .subscriber(Arc::new(subscriber))
        .build();

    let user = app
        .user_commands
        .create("Admin", "admin@example.com", "$2y$10$abcdef")
        .await
        .unwrap();
    let id = user.id().unwrap().value() as i64;

    clock.advance(Duration::days(1));
    let patched = app
        .user_commands
        .patch(id, Some("Administrator"), None, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(patched.name().as_str(), "Administrator");

    let model = app.user_queries.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(model.email, "admin@example.com");
    assert!(model.created_at.starts_with("2024-01-15T10:30:00"));

    // Password hashes never leave the aggregate
    let json = serde_json::to_string(&events.try_recv().unwrap()).unwrap();
    assert!(!json.contains("abcdef"));

    assert!(app.user_commands.delete(id).await.unwrap().is_some());
    assert!(app.user_queries.get_by_id(id).await.unwrap().is_none());
    assert_eq!(app.user_queries.list(None, 0).await.unwrap().total, 0);
}
