//! Headless demo driver.
//!
//! Probes the prediction service, and when given a video path uploads
//! it through the controller and prints the revealed result the way
//! the page would show it.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use formsight_client::ApiClient;
use formsight_session::{Controller, MediaTransport, PANEL_SLIDE_DELAY, RESULT_REVEAL_DELAY};

/// Transport that narrates player actions to the log.
struct ConsoleTransport;

impl MediaTransport for ConsoleTransport {
    fn play(&self) {
        info!("player: play");
    }

    fn pause(&self) {
        info!("player: pause");
    }

    fn seek(&self, seconds: f64) {
        info!("player: seek to {seconds}s");
    }

    fn set_muted(&self, muted: bool) {
        info!("player: muted={muted}");
    }

    fn write_time_display(&self, text: &str) {
        info!("player: {text}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("formsight=info,formsight_demo=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .init();

    let client = ApiClient::from_env().context("Failed to build API client")?;
    info!("Using service at {}", client.base_url());

    match client.model_status().await {
        Ok(status) => info!(
            "Model status: {} (version: {})",
            status.status,
            status.version.as_deref().unwrap_or("unknown")
        ),
        Err(e) => warn!("Model status unavailable: {e}"),
    }

    let greeting = client.greet("FormSight demo").await?;
    info!("Service says: {}", greeting.message);

    let Some(path) = std::env::args().nth(1) else {
        info!("No video path given; pass one to run the upload flow");
        return Ok(());
    };

    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {path}"))?;
    let filename = std::path::Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.mp4")
        .to_string();

    let controller = Arc::new(Controller::new(
        Arc::new(client),
        Arc::new(ConsoleTransport),
    ));

    info!("Uploading {filename} ({} bytes)", bytes.len());
    controller.select_file(&filename, bytes).await?;

    // Let the reveal choreography run its course before reading out.
    tokio::time::sleep(PANEL_SLIDE_DELAY + RESULT_REVEAL_DELAY + Duration::from_millis(100)).await;

    let session = controller.snapshot();
    if let Some(media) = session.server_media.as_ref() {
        info!("Processed clip: {}", media.url());
    }
    if let Some(prediction) = session.prediction.as_ref() {
        info!(
            "Classification: {} at {}",
            prediction.predicted_label,
            prediction.confidence_percent()
        );
        for tip in controller.recommendations() {
            info!("  - {tip}");
        }
    }

    Ok(())
}
