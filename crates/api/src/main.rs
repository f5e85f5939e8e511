use std::process::ExitCode;

use mymedicine_api::{Config, RouteGroups, server};

#[tokio::main]
async fn main() -> ExitCode {
    // Variables already present in the environment win over `.env`.
    let dotenv = dotenvy::dotenv();

    mymedicine_observability::init();

    if let Err(e) = &dotenv {
        if !e.not_found() {
            tracing::warn!("failed to load .env: {e}");
        }
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // The auth and medication route groups live in their own crates and are
    // mounted here with `RouteGroups::auth` / `RouteGroups::medications`.
    let groups = RouteGroups::new();

    match server::run(config, groups).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
