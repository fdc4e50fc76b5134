//! In-memory gateway for tests that should not touch the network.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::github::error::GatewayError;
use crate::github::locator::{OrganizationName, RepositoryLocator};
use crate::github::models::{Commit, Label, PullRequestSummary, Repository, Tag};

use super::{ListPullRequestsParams, PullRequestState, RepositoryGateway};

#[derive(Debug, Clone)]
struct FakePullRequest {
    summary: PullRequestSummary,
    base: String,
    labels: Vec<String>,
}

#[derive(Debug, Clone)]
struct FakeTag {
    tag: Tag,
    commit: Commit,
}

#[derive(Debug, Clone)]
struct FakeRepository {
    owner: String,
    name: String,
    pulls: Vec<FakePullRequest>,
    tags: Vec<FakeTag>,
}

/// Gateway serving open pull requests, labels and tags from memory.
///
/// Every stored pull request is open. Listings come back in insertion order
/// regardless of the requested sort key.
#[derive(Debug, Default)]
pub struct FakeGateway {
    repositories: Vec<FakeRepository>,
    failure: Option<GatewayError>,
    pull_requests_requests: Mutex<Vec<(String, ListPullRequestsParams)>>,
}

impl FakeGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway whose every call fails with `error`.
    #[must_use]
    pub fn failing(error: GatewayError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Adds an empty repository.
    #[must_use]
    pub fn with_repository(mut self, owner: &str, name: &str) -> Self {
        self.update_repository(owner, name, |_| {});
        self
    }

    /// Adds an open pull request targeting `base` with the given labels.
    #[must_use]
    pub fn with_pull_request(
        mut self,
        owner: &str,
        name: &str,
        base: &str,
        summary: PullRequestSummary,
        labels: &[&str],
    ) -> Self {
        let pull = FakePullRequest {
            summary,
            base: base.to_owned(),
            labels: labels.iter().map(|label| (*label).to_owned()).collect(),
        };
        self.update_repository(owner, name, |repo| repo.pulls.push(pull));
        self
    }

    /// Adds a tag pointing at a commit with the given message and author.
    #[must_use]
    pub fn with_tag(
        mut self,
        owner: &str,
        name: &str,
        tag_name: &str,
        message: &str,
        author_login: Option<&str>,
    ) -> Self {
        let sha = format!("{tag_name}-sha");
        let entry = FakeTag {
            tag: Tag {
                name: tag_name.to_owned(),
                commit_sha: sha.clone(),
            },
            commit: Commit {
                sha,
                message: message.to_owned(),
                author_login: author_login.map(ToOwned::to_owned),
            },
        };
        self.update_repository(owner, name, |repo| repo.tags.push(entry));
        self
    }

    /// Returns the `owner/name` and parameters of every pull request listing
    /// served so far.
    #[must_use]
    pub fn pull_request_requests(&self) -> Vec<(String, ListPullRequestsParams)> {
        self.pull_requests_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    fn update_repository(
        &mut self,
        owner: &str,
        name: &str,
        apply: impl FnOnce(&mut FakeRepository),
    ) {
        if let Some(existing) = self
            .repositories
            .iter_mut()
            .find(|repo| repo.owner == owner && repo.name == name)
        {
            apply(existing);
            return;
        }
        let mut repository = FakeRepository {
            owner: owner.to_owned(),
            name: name.to_owned(),
            pulls: Vec::new(),
            tags: Vec::new(),
        };
        apply(&mut repository);
        self.repositories.push(repository);
    }

    fn find(&self, locator: &RepositoryLocator) -> Result<&FakeRepository, GatewayError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.repositories
            .iter()
            .find(|repo| {
                repo.owner == locator.owner().as_str() && repo.name == locator.repository().as_str()
            })
            .ok_or_else(|| GatewayError::NotFound {
                message: format!("repository {locator} does not exist"),
            })
    }
}

#[async_trait]
impl RepositoryGateway for FakeGateway {
    async fn list_pull_requests(
        &self,
        locator: &RepositoryLocator,
        params: &ListPullRequestsParams,
    ) -> Result<Vec<PullRequestSummary>, GatewayError> {
        let repository = self.find(locator)?;
        if let Ok(mut requests) = self.pull_requests_requests.lock() {
            requests.push((locator.to_string(), params.clone()));
        }
        if params.state == PullRequestState::Closed {
            return Ok(Vec::new());
        }
        Ok(repository
            .pulls
            .iter()
            .filter(|pull| params.base.as_ref().is_none_or(|base| *base == pull.base))
            .map(|pull| pull.summary.clone())
            .collect())
    }

    async fn list_labels(
        &self,
        locator: &RepositoryLocator,
        number: u64,
    ) -> Result<Vec<Label>, GatewayError> {
        let repository = self.find(locator)?;
        repository
            .pulls
            .iter()
            .find(|pull| pull.summary.number == number)
            .map(|pull| {
                pull.labels
                    .iter()
                    .map(|name| Label { name: name.clone() })
                    .collect()
            })
            .ok_or_else(|| GatewayError::NotFound {
                message: format!("pull request #{number} does not exist in {locator}"),
            })
    }

    async fn list_tags(&self, locator: &RepositoryLocator) -> Result<Vec<Tag>, GatewayError> {
        let repository = self.find(locator)?;
        Ok(repository.tags.iter().map(|entry| entry.tag.clone()).collect())
    }

    async fn commit(
        &self,
        locator: &RepositoryLocator,
        sha: &str,
    ) -> Result<Commit, GatewayError> {
        let repository = self.find(locator)?;
        repository
            .tags
            .iter()
            .find(|entry| entry.commit.sha == sha)
            .map(|entry| entry.commit.clone())
            .ok_or_else(|| GatewayError::NotFound {
                message: format!("commit {sha} does not exist in {locator}"),
            })
    }

    async fn list_organization_repositories(
        &self,
        organization: &OrganizationName,
    ) -> Result<Vec<Repository>, GatewayError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        Ok(self
            .repositories
            .iter()
            .filter(|repo| repo.owner == organization.as_str())
            .map(|repo| Repository {
                name: repo.name.clone(),
            })
            .collect())
    }

    async fn repository(&self, locator: &RepositoryLocator) -> Result<Repository, GatewayError> {
        let repository = self.find(locator)?;
        Ok(Repository {
            name: repository.name.clone(),
        })
    }
}
