//! Failures surfaced by page handlers.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use tracing::error;

use crate::export::ExportError;
use crate::github::GatewayError;

use super::render::RenderError;

/// Any failure while serving a page.
///
/// Every variant becomes a generic `500 Internal Server Error`; the detail is
/// only logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    /// GitHub could not be queried.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The spreadsheet could not be built.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The page template failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
