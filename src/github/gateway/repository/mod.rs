//! Octocrab-backed repository gateway.
//!
//! Listings request `per_page=100` and follow the `Link` headers through
//! Octocrab's `all_pages`, so callers always see complete results.

use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::github::error::GatewayError;
use crate::github::locator::{OrganizationName, PersonalAccessToken, RepositoryLocator};
use crate::github::models::{
    ApiCommit, ApiLabel, ApiPullRequestSummary, ApiRepository, ApiTag, Commit, Label,
    PullRequestSummary, Repository, Tag,
};

use super::RepositoryGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;

mod types;

pub use types::{ListPullRequestsParams, PullRequestSort, PullRequestState};

const PER_PAGE: u8 = 100;

/// Octocrab-backed repository gateway.
pub struct OctocrabRepositoryGateway {
    client: Octocrab,
}

impl OctocrabRepositoryGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the optional token and API base URL.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::InvalidUrl` when the base URI cannot be parsed or
    /// `GatewayError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: Option<&PersonalAccessToken>,
        api_base: &str,
    ) -> Result<Self, GatewayError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }

    async fn fetch_all<Api, Item>(
        &self,
        operation: &str,
        path: String,
        query: &[(&'static str, String)],
    ) -> Result<Vec<Item>, GatewayError>
    where
        Api: DeserializeOwned + Into<Item> + Send,
        Item: Send,
    {
        debug!(operation, path = %path, "fetching from GitHub");
        let first: Page<Api> = self
            .client
            .get(path, Some(query))
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        self.client
            .all_pages(first)
            .await
            .map(|items| items.into_iter().map(Into::into).collect())
            .map_err(|error| map_octocrab_error(operation, &error))
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabRepositoryGateway {
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<Vec<PullRequestSummary>, GatewayError> {
        let query = params.query_pairs(PER_PAGE);
        self.fetch_all::<ApiPullRequestSummary, _>("list pulls", locator.pulls_path(), &query)
            .await
    }

    async fn list_labels(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Label>, GatewayError> {
        let query = [("per_page", PER_PAGE.to_string())];
        self.fetch_all::<ApiLabel, _>("list labels", locator.labels_path(number), &query)
            .await
    }

    async fn list_tags(&self, locator: &RepositoryLocator) -> Result<Vec<Tag>, GatewayError> {
        let query = [("per_page", PER_PAGE.to_string())];
        self.fetch_all::<ApiTag, _>("list tags", locator.tags_path(), &query)
            .await
    }

    async fn commit(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
    ) -> Result<Commit, GatewayError> {
        self.client
            .get::<ApiCommit, _, _>(locator.commit_path(sha), None::<&()>)
            .await
            .map(ApiCommit::into)
            .map_err(|error| map_octocrab_error("get commit", &error))
    }

    async fn list_organization_repositories(
        &self,
        organization: &OrganizationName,
    ) -> Result<Vec<Repository>, GatewayError> {
        let query = [("per_page", PER_PAGE.to_string())];
        self.fetch_all::<ApiRepository, _>("list repositories", organization.repos_path(), &query)
            .await
    }

    async fn repository(&self, locator: &RepositoryLocator) -> Result<Repository, GatewayError> {
        self.client
            .get::<ApiRepository, _, _>(locator.repository_path(), None::<&()>)
            .await
            .map(ApiRepository::into)
            .map_err(|error| map_octocrab_error("get repository", &error))
    }
}
