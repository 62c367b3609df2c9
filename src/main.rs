//! Resume Core - demo entry point
//!
//! Wires the in-memory core and walks one resume through its lifecycle,
//! logging each step. Useful for checking configuration and log output.

use anyhow::{Context, Result};
use resume_core::observability::init_tracing;
use resume_core::{App, Config};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_tracing("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    init_tracing(&config.log_level);
    info!(
        default_page_size = config.default_page_size,
        max_page_size = config.max_page_size,
        audit_log = config.audit_log_enabled,
        "Configuration loaded"
    );

    let app = App::in_memory(config);

    let resume = app
        .resume_commands
        .create("Jane Doe", "jane@x.com", None)
        .await?;
    let id = resume.id().context("created resume has no id")?;
    let id = i64::try_from(id)?;
    info!(resume_id = id, status = %resume.status(), "Created resume");

    for status in ["published", "published", "archived"] {
        if let Some(resume) = app
            .resume_commands
            .patch(id, None, None, Some(status))
            .await?
        {
            info!(resume_id = id, status = %resume.status(), "Patched resume");
        }
    }

    if let Some(history) = app.resume_queries.status_history(id).await? {
        for entry in history {
            info!(
                from = %entry.from_status,
                to = %entry.to_status,
                changed_at = %entry.changed_at,
                "History entry"
            );
        }
    }

    app.resume_commands.delete(id).await?;

    let summary = app.metrics.summary();
    info!(
        events = summary.events_published_total,
        deliveries = summary.deliveries_total,
        failures = summary.subscriber_failures_total,
        "Resume Core demo complete"
    );
    Ok(())
}
