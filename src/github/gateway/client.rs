//! Octocrab client construction helpers for gateway implementations.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::GatewayError;
use crate::github::locator::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the given API base URL.
///
/// Without a token the client is anonymous; GitHub then rejects requests for
/// private repositories on first use rather than at startup.
///
/// # Errors
///
/// Returns `GatewayError::InvalidUrl` when the base URI cannot be parsed or
/// `GatewayError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &str,
) -> Result<Octocrab, GatewayError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| GatewayError::InvalidUrl(error.to_string()))?;

    let builder = token.map_or_else(Octocrab::builder, |value| {
        Octocrab::builder().personal_token(value.as_ref())
    });

    builder
        .base_uri(base_uri)
        .map_err(|error| GatewayError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
