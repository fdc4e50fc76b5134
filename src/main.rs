//! readyboard entrypoint: loads configuration and serves the dashboard.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use readyboard::web::RenderError;
use readyboard::{AppState, GatewayError, OctocrabRepositoryGateway, ReadyBoardConfig, serve};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "readyboard=info";

/// Failures that stop the dashboard from starting or serving.
#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("failed to load templates: {0}")]
    Render(#[from] RenderError),

    #[error("server error: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = load_config()?;
    init_tracing();

    let repository = config.repository_locator()?;
    let organization = config.organization_name()?;
    let address = config.socket_address()?;
    let token = config.access_token();
    if token.is_none() {
        info!("no GitHub token configured; requests are unauthenticated");
    }

    let gateway = OctocrabRepositoryGateway::for_token(token.as_ref(), &config.api_base)?;
    let state = AppState::new(Arc::new(gateway), repository, organization)?;

    let listener = TcpListener::bind(address).await?;
    serve(listener, Arc::new(state)).await?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`GatewayError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReadyBoardConfig, GatewayError> {
    ReadyBoardConfig::load().map_err(|error| GatewayError::Configuration {
        message: error.to_string(),
    })
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();
}
