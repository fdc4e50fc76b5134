//! HTTP surface of the dashboard.
//!
//! | Route | Methods | Page |
//! |---|---|---|
//! | `/` | GET | Landing page |
//! | `/ready-for-review` | GET, POST | `ready for review` listing; `?download=excel` streams a spreadsheet |
//! | `/ready-for-release` | GET, POST | `ready for release` listing |
//! | `/releases` | GET | Tag summaries |
//! | `/ready-for-reviews` | GET | Organization repositories awaiting review |
//! | `/ready-for-review/{repo_name}` | GET | Per-repository `ready for review` listing |
//!
//! Handlers hold no state between requests. Any failure is logged and
//! answered with a bare `500 Internal Server Error`.

mod error;
mod handlers;
mod render;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::info;

use crate::github::{OrganizationName, RepositoryGateway, RepositoryLocator};

pub use error::PageError;
pub use handlers::{DownloadQuery, EXCEL_DOWNLOAD};
pub use render::{Page, PageRenderer, RenderError};

/// Everything a request needs: the gateway, what to show, and the templates.
pub struct AppState {
    gateway: Arc<dyn RepositoryGateway>,
    repository: RepositoryLocator,
    organization: OrganizationName,
    renderer: PageRenderer,
}

impl AppState {
    /// Builds the state and loads the page templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when a template fails to parse.
    pub fn new(
        gateway: Arc<dyn RepositoryGateway>,
        repository: RepositoryLocator,
        organization: OrganizationName,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            gateway,
            repository,
            organization,
            renderer: PageRenderer::new()?,
        })
    }

    /// Repository shown on the single-repository pages.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryLocator {
        &self.repository
    }

    /// Organization scanned by the overview page.
    #[must_use]
    pub const fn organization(&self) -> &OrganizationName {
        &self.organization
    }
}

/// Shared handle passed to every handler.
pub type SharedState = Arc<AppState>;

/// Builds the dashboard router.
#[must_use]
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/ready-for-review",
            get(handlers::ready_for_review).post(handlers::refresh_ready_for_review),
        )
        .route(
            "/ready-for-release",
            get(handlers::ready_for_release).post(handlers::ready_for_release),
        )
        .route("/releases", get(handlers::releases))
        .route("/ready-for-reviews", get(handlers::ready_for_reviews))
        .route(
            "/ready-for-review/{repo_name}",
            get(handlers::ready_for_review_in),
        )
        .with_state(state)
}

/// Serves the dashboard on `listener` until the process stops.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve(listener: TcpListener, state: SharedState) -> std::io::Result<()> {
    if let Ok(address) = listener.local_addr() {
        info!(%address, repository = %state.repository(), "serving dashboard");
    }
    axum::serve(listener, build_router(state)).await
}
