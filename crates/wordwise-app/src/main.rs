use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod cli;
mod clipboard;
mod commands;
mod controller;
mod events;
mod practice;
mod profile;
mod requests;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::{Args, Command};
use self::controller::AppController;
use self::profile::ProfileDir;
use self::state::AppState;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("wordwise={level}").parse()?),
        )
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env loaded: {e}");
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let result = runtime.block_on(run(args));
    // stdin reads park a blocking thread; don't wait on them after Ctrl+C
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}

async fn run(args: Args) -> anyhow::Result<()> {
    let profiles = ProfileDir::default_location();
    if let Err(e) = profiles.init() {
        tracing::warn!("Could not initialize profiles: {e:#}");
    }

    let profile = args.profile.as_deref().unwrap_or("main");
    let mut config = profiles.load(profile)?;
    config.apply_env();
    tracing::debug!(
        profile,
        model = %config.completion.model,
        api_url = %config.completion.api_url,
        "loaded config"
    );

    let state = Arc::new(AppState::from_config(config)?);

    match args.command {
        Some(Command::Lookup { word, save, json }) => {
            commands::lookup(&state, &word, save, json).await
        }
        Some(Command::Improve {
            sentence,
            json,
            copy,
        }) => commands::improve(&state, &sentence.join(" "), json, copy).await,
        Some(Command::Practice) => {
            commands::practice();
            Ok(())
        }
        Some(Command::Favorites { action }) => commands::favorites(&state, action),
        Some(Command::Session) | None => session(state).await,
    }
}

async fn session(state: Arc<AppState>) -> anyhow::Result<()> {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("session task finished"),
                Ok(Err(e)) => tracing::error!("session task failed: {e:#}"),
                Err(e) => tracing::error!("session task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("session task failed: {e:#}");
        }
    }

    Ok(())
}
