//! Error mapping helpers for the Octocrab GitHub gateway implementation.

use http::StatusCode;

use crate::github::error::GatewayError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> GatewayError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let status = source.status_code;
        let message = format!(
            "{operation} failed: GitHub returned {status} {message}",
            message = source.message
        );
        return if is_auth_failure(status) {
            GatewayError::Authentication { message }
        } else if status == StatusCode::NOT_FOUND {
            GatewayError::NotFound { message }
        } else {
            GatewayError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return GatewayError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    GatewayError::Api {
        message: format!("{operation} failed: {error}"),
    }
}
