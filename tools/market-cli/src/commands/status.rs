//! Listing API status command.

use anyhow::{Context as _, Result};
use market_data::{HealthStatus, RemoteCatalog};
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct StatusReport<'a> {
    base_url: &'a str,
    offline: bool,
    health: HealthStatus,
}

/// Check that the listing API is up.
pub async fn run(ctx: &Context) -> Result<()> {
    let remote = RemoteCatalog::new(ctx.config.remote_config())
        .context("Failed to create listing API client")?;
    let health_url = remote.config().health_url()?;

    let spinner = ctx.output.spinner("Checking listing API...");
    let health = remote.health_check().await;
    spinner.finish_and_clear();
    let health = health.with_context(|| format!("Listing API unreachable at {}", health_url))?;

    if ctx.output.is_json() {
        ctx.output.json(&StatusReport {
            base_url: &ctx.config.api.base_url,
            offline: ctx.config.catalog.offline,
            health,
        });
        return Ok(());
    }

    ctx.output.header("Listing API");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("status", &health.status);
    ctx.output.kv("service", &health.service);
    ctx.output.kv("version", &health.version);
    if ctx.config.catalog.offline {
        ctx.output
            .info("Offline mode is on, catalog commands use the built-in listings");
    }

    Ok(())
}
