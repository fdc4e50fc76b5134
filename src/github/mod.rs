//! GitHub repository access for the dashboard.
//!
//! This module wraps Octocrab behind the [`RepositoryGateway`] trait so the
//! dashboard can list pull requests, labels, tags and organization
//! repositories. Errors are mapped into [`GatewayError`] variants so callers
//! never see Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::GatewayError;
#[cfg(any(test, feature = "test-support"))]
pub use gateway::FakeGateway;
pub use gateway::{
    ListPullRequestsParams, OctocrabRepositoryGateway, PullRequestSort, PullRequestState,
    RepositoryGateway,
};
pub use locator::{
    OrganizationName, PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner,
};
pub use models::{Commit, Label, PullRequestSummary, Repository, Tag};

#[cfg(test)]
pub use gateway::MockRepositoryGateway;

#[cfg(test)]
mod tests;
