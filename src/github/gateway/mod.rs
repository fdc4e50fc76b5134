//! Gateways for reading repository data through Octocrab.
//!
//! The dashboard only needs a handful of read operations, so they are
//! gathered behind the [`RepositoryGateway`] capability trait. The Octocrab
//! implementation handles real HTTP requests while tests use mocks or the
//! in-memory fake.

mod client;
mod error_mapping;
#[cfg(any(test, feature = "test-support"))]
mod fake;
mod repository;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeGateway;
pub use repository::{
    ListPullRequestsParams, OctocrabRepositoryGateway, PullRequestSort, PullRequestState,
};

use async_trait::async_trait;

use crate::github::error::GatewayError;
use crate::github::locator::{OrganizationName, RepositoryLocator};
use crate::github::models::{Commit, Label, PullRequestSummary, Repository, Tag};

/// Read-only access to the repositories the dashboard reports on.
///
/// Every listing returns the complete, unpaginated result in the order GitHub
/// produced it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// List pull requests for the repository.
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<Vec<PullRequestSummary>, GatewayError>;

    /// List the labels attached to a pull request.
    async fn list_labels(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Label>, GatewayError>;

    /// List the repository's tags.
    async fn list_tags(&self, locator: &RepositoryLocator) -> Result<Vec<Tag>, GatewayError>;

    /// Resolve a commit by SHA.
    async fn commit(&self, locator: &RepositoryLocator, sha: &str)
    -> Result<Commit, GatewayError>;

    /// List repositories owned by an organization.
    async fn list_organization_repositories(
        &self,
        organization: &OrganizationName,
    ) -> Result<Vec<Repository>, GatewayError>;

    /// Resolve a repository, failing with `GatewayError::NotFound` when it
    /// does not exist or is not visible to the token.
    async fn repository(&self, locator: &RepositoryLocator) -> Result<Repository, GatewayError>;
}
