//! Shared test utilities for router tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response};
use readyboard::{
    AppState, OrganizationName, PullRequestSummary, RepositoryGateway, RepositoryLocator,
    build_router,
};
use tower::ServiceExt;

/// Builds a router for `acme/api` within the `acme` organization.
///
/// # Panics
///
/// Panics if the templates fail to load.
pub fn router_for(gateway: impl RepositoryGateway + 'static) -> Router {
    let repository =
        RepositoryLocator::from_owner_repo("acme", "api").expect("locator should be valid");
    let organization = OrganizationName::new("acme").expect("organization should be valid");
    let state = AppState::new(Arc::new(gateway), repository, organization)
        .expect("templates should load");
    build_router(Arc::new(state))
}

/// Sends one request through `router`.
///
/// # Panics
///
/// Panics if the request cannot be built or the router fails.
pub async fn send(router: Router, method: &str, uri: &str) -> Response<Body> {
    router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("router should respond")
}

/// Reads a response body to bytes.
///
/// # Panics
///
/// Panics if the body cannot be read.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable")
        .to_vec()
}

/// Reads a response body as UTF-8 text.
///
/// # Panics
///
/// Panics if the body is not UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

/// A pull request in `acme/api`.
#[must_use]
pub fn pull(number: u64, title: &str, author: &str) -> PullRequestSummary {
    PullRequestSummary {
        number,
        title: title.to_owned(),
        url: format!("https://github.com/acme/api/pull/{number}"),
        author_login: author.to_owned(),
    }
}
