//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.readyboard.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `READYBOARD_TOKEN`, `READYBOARD_OWNER`, ...
//!    plus the legacy `GITHUB_TOKEN` fallback
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`, ...
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "acme"
//! repo = "api"
//! organization = "acme"
//! api_base = "https://api.github.com"
//! bind = "127.0.0.1"
//! port = 5000
//! ```

use std::env;
use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::{GatewayError, OrganizationName, PersonalAccessToken, RepositoryLocator};

/// Default GitHub REST API root.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Dashboard configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `READYBOARD_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `READYBOARD_OWNER` or `--owner`: Repository owner
/// - `READYBOARD_REPO` or `--repo`: Repository name
/// - `READYBOARD_ORGANIZATION` or `--organization`: Organization to scan
/// - `READYBOARD_API_BASE` or `--api-base`: GitHub API root
/// - `READYBOARD_BIND` / `READYBOARD_PORT`: Listen address
///
/// # Example
///
/// ```no_run
/// use readyboard::ReadyBoardConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ReadyBoardConfig::load().expect("failed to load configuration");
/// let locator = config.repository_locator().expect("owner and repo required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "READYBOARD",
    discovery(
        dotfile_name = ".readyboard.toml",
        config_file_name = "readyboard.toml",
        app_name = "readyboard"
    )
)]
pub struct ReadyBoardConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `READYBOARD_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Owner of the repository shown on the single-repository pages.
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository shown on the single-repository pages.
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Organization scanned by the overview page. Defaults to `owner`.
    #[ortho_config(cli_short = 'g')]
    pub organization: Option<String>,

    /// GitHub REST API root, e.g. a GitHub Enterprise endpoint.
    #[ortho_config()]
    pub api_base: String,

    /// Address the HTTP server listens on.
    #[ortho_config()]
    pub bind: String,

    /// Port the HTTP server listens on.
    #[ortho_config()]
    pub port: u16,
}

impl Default for ReadyBoardConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            repo: None,
            organization: None,
            api_base: DEFAULT_API_BASE.to_owned(),
            bind: DEFAULT_BIND.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl ReadyBoardConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// Blank values count as absent.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .filter(|token| !token.trim().is_empty())
    }

    /// Returns the validated access token, if any source provides one.
    ///
    /// The dashboard runs unauthenticated without a token.
    #[must_use]
    pub fn access_token(&self) -> Option<PersonalAccessToken> {
        self.resolve_token()
            .and_then(|token| PersonalAccessToken::new(token).ok())
    }

    /// Returns owner and repo if both are configured.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] when owner or repo is missing.
    pub fn require_repository_info(&self) -> Result<(&str, &str), GatewayError> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) => Ok((owner.as_str(), repo.as_str())),
            (None, _) => Err(GatewayError::Configuration {
                message: "repository owner is required (use --owner or -o)".to_owned(),
            }),
            (_, None) => Err(GatewayError::Configuration {
                message: "repository name is required (use --repo or -r)".to_owned(),
            }),
        }
    }

    /// Locator for the configured repository.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] when owner or repo is missing
    /// and [`GatewayError::MissingPathSegments`] when either is blank.
    pub fn repository_locator(&self) -> Result<RepositoryLocator, GatewayError> {
        let (owner, repo) = self.require_repository_info()?;
        RepositoryLocator::from_owner_repo(owner, repo)
    }

    /// Organization to scan: `organization` when set, otherwise `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] when neither is configured and
    /// [`GatewayError::MissingPathSegments`] when the value is blank.
    pub fn organization_name(&self) -> Result<OrganizationName, GatewayError> {
        let name = self
            .organization
            .as_deref()
            .or(self.owner.as_deref())
            .ok_or_else(|| GatewayError::Configuration {
                message: "organization is required (use --organization or --owner)".to_owned(),
            })?;
        OrganizationName::new(name)
    }

    /// Socket address built from `bind` and `port`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] when `bind` is not an IP
    /// address.
    pub fn socket_address(&self) -> Result<SocketAddr, GatewayError> {
        let ip: IpAddr = self
            .bind
            .trim()
            .parse()
            .map_err(|error| GatewayError::Configuration {
                message: format!("invalid bind address '{}': {error}", self.bind),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests;
