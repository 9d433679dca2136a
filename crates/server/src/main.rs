mod bootstrap;
mod health;

use anyhow::Result;
use airtime_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use airtime_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;

    health::spawn(
        &app.config.server.bind_address,
        app.config.server.health_check_port,
        health::SkillStatus::of(app.runner.dispatcher()),
    )
    .await?;

    tracing::info!(
        event_name = "system.server.started",
        card_title = %app.runner.dispatcher().card_title(),
        "airtime-server started"
    );
    app.runner.start().await?;

    wait_for_shutdown().await?;
    tracing::info!(event_name = "system.server.stopping", "airtime-server stopping");

    Ok(())
}

async fn wait_for_shutdown() -> Result<()> {
    tokio::signal::ctrl_c().await?;
    Ok(())
}
