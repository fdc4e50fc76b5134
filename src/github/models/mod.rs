//! Data models for pull requests, labels, tags and repositories.
//!
//! Types prefixed with `Api` are internal deserialisation targets for GitHub
//! REST payloads that convert into the public domain types.

use serde::{Deserialize, Serialize};

/// Read-only view of an open pull request for listing and export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestSummary {
    /// Pull request number, unique within its repository.
    pub number: u64,
    /// Title of the pull request.
    pub title: String,
    /// Web link to the pull request.
    pub url: String,
    /// Login of the pull request author.
    pub author_login: String,
}

/// Label attached to a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Label name as shown on GitHub.
    pub name: String,
}

/// Tag entry from a repository tag listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name, e.g. `v1.2.0`.
    pub name: String,
    /// SHA of the tagged commit.
    pub commit_sha: String,
}

/// Commit resolved from a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Commit SHA.
    pub sha: String,
    /// Full commit message.
    pub message: String,
    /// GitHub login of the author, absent when the commit email matches no
    /// account.
    pub author_login: Option<String>,
}

/// Repository listed within an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    /// Repository name without the owner prefix.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequestSummary {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) html_url: Option<String>,
    pub(crate) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    pub(crate) name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommitRef {
    pub(crate) sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiTag {
    pub(crate) name: String,
    pub(crate) commit: ApiCommitRef,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiGitCommit {
    #[serde(default)]
    pub(crate) message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiCommit {
    pub(crate) sha: String,
    pub(crate) commit: ApiGitCommit,
    pub(crate) author: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) name: String,
}

impl From<ApiPullRequestSummary> for PullRequestSummary {
    fn from(value: ApiPullRequestSummary) -> Self {
        Self {
            number: value.number,
            title: value.title.unwrap_or_default(),
            url: value.html_url.unwrap_or_default(),
            author_login: value.user.and_then(|user| user.login).unwrap_or_default(),
        }
    }
}

impl From<ApiLabel> for Label {
    fn from(value: ApiLabel) -> Self {
        Self { name: value.name }
    }
}

impl From<ApiTag> for Tag {
    fn from(value: ApiTag) -> Self {
        Self {
            name: value.name,
            commit_sha: value.commit.sha,
        }
    }
}

impl From<ApiCommit> for Commit {
    fn from(value: ApiCommit) -> Self {
        Self {
            sha: value.sha,
            message: value.commit.message,
            author_login: value.author.and_then(|user| user.login),
        }
    }
}

impl From<ApiRepository> for Repository {
    fn from(value: ApiRepository) -> Self {
        Self {
            name: value.name,
        }
    }
}
