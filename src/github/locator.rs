//! Identity wrappers for repositories and organizations.

use std::fmt;

use serde::Serialize;

use super::error::GatewayError;

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    /// Validates that the owner is a non-empty GitHub login.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::MissingPathSegments` when the value is blank
    /// and `GatewayError::InvalidIdentifier` when it is not a single path
    /// segment of `[A-Za-z0-9._-]`.
    pub fn new(value: &str) -> Result<Self, GatewayError> {
        path_segment(value).map(Self)
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// Validates that the repository name is a non-empty GitHub name.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::MissingPathSegments` when the value is blank
    /// and `GatewayError::InvalidIdentifier` when it is not a single path
    /// segment of `[A-Za-z0-9._-]`.
    pub fn new(value: &str) -> Result<Self, GatewayError> {
        path_segment(value).map(Self)
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Organization whose repositories are scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationName(RepositoryOwner);

impl OrganizationName {
    /// Validates the organization login like a repository owner.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::MissingPathSegments` when the value is blank
    /// and `GatewayError::InvalidIdentifier` for an invalid login.
    pub fn new(value: &str) -> Result<Self, GatewayError> {
        RepositoryOwner::new(value).map(Self)
    }

    /// Borrow the organization name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Locator for a repository owned by this organization.
    #[must_use]
    pub fn repository(&self, name: RepositoryName) -> RepositoryLocator {
        RepositoryLocator {
            owner: self.0.clone(),
            repository: name,
        }
    }

    /// Returns the API path for listing the organization's repositories.
    pub(crate) fn repos_path(&self) -> String {
        format!("/orgs/{}/repos", self.as_str())
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Authentication` when the supplied string is
    /// blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, GatewayError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GatewayError::Authentication {
                message: "personal access token is blank".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PersonalAccessToken(***)")
    }
}

/// Owner and name identifying one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and repository name strings.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::MissingPathSegments` when owner or repo is empty
    /// and `GatewayError::InvalidIdentifier` when either is not a valid name.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, GatewayError> {
        Ok(Self {
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    pub(crate) fn repository_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("{}/pulls", self.repository_path())
    }

    /// Labels live on the issue that backs every pull request.
    pub(crate) fn labels_path(&self, number: u64) -> String {
        format!("{}/issues/{number}/labels", self.repository_path())
    }

    pub(crate) fn tags_path(&self) -> String {
        format!("{}/tags", self.repository_path())
    }

    pub(crate) fn commit_path(&self, sha: &str) -> String {
        format!("{}/commits/{sha}", self.repository_path())
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner.as_str(), self.repository.as_str())
    }
}

/// Identifiers are pasted into REST paths, so they must stay one segment.
fn path_segment(value: &str) -> Result<String, GatewayError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::MissingPathSegments);
    }
    let allowed = trimmed.chars().all(|character| {
        character.is_ascii_alphanumeric() || matches!(character, '.' | '_' | '-')
    });
    if !allowed || trimmed == "." || trimmed == ".." {
        return Err(GatewayError::InvalidIdentifier {
            value: trimmed.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}
