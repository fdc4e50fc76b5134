//! Page-level dashboard operations.
//!
//! The [`Dashboard`] facade combines gateway listings with the label filter,
//! the tag summariser and the organization scan. Every remote call is
//! awaited in turn; nothing runs concurrently within one request.

pub mod labels;
pub mod releases;
pub mod scan;

use tracing::info;

use crate::github::{
    GatewayError, ListPullRequestsParams, OrganizationName, PullRequestSummary,
    RepositoryGateway, RepositoryLocator, RepositoryName,
};

pub use labels::{ReadyLabel, filter_by_label, has_label, list_labelled_pull_requests};
pub use releases::{TagSummary, UNKNOWN_AUTHOR, summarize_tags};
pub use scan::{MASTER_BRANCH, scan_organization};

/// Aggregates the dashboard pages' data using a gateway.
///
/// # Example
///
/// ```ignore
/// use readyboard::{Dashboard, OctocrabRepositoryGateway, RepositoryLocator};
///
/// let gateway = OctocrabRepositoryGateway::for_token(None, "https://api.github.com")?;
/// let locator = RepositoryLocator::from_owner_repo("owner", "repo")?;
/// let dashboard = Dashboard::new(&gateway);
/// let pulls = dashboard.ready_for_review(&locator).await?;
/// ```
pub struct Dashboard<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    client: &'client Gateway,
}

impl<'client, Gateway> Dashboard<'client, Gateway>
where
    Gateway: RepositoryGateway + ?Sized,
{
    /// Create a new dashboard facade.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Open pull requests labelled `ready for review`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn ready_for_review(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<PullRequestSummary>, GatewayError> {
        info!(repository = %locator, "listing pull requests ready for review");
        list_labelled_pull_requests(
            self.client,
            locator,
            &ListPullRequestsParams::default(),
            ReadyLabel::ForReview.as_str(),
        )
        .await
    }

    /// Open pull requests labelled `ready for release`.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn ready_for_release(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<PullRequestSummary>, GatewayError> {
        info!(repository = %locator, "listing pull requests ready for release");
        list_labelled_pull_requests(
            self.client,
            locator,
            &ListPullRequestsParams::default(),
            ReadyLabel::ForRelease.as_str(),
        )
        .await
    }

    /// Summaries of every tag in the repository.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn releases(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<TagSummary>, GatewayError> {
        info!(repository = %locator, "listing releases");
        let tags = self.client.list_tags(locator).await?;
        summarize_tags(self.client, locator, &tags).await
    }

    /// Organization repositories with a `ready for review` pull request
    /// against [`MASTER_BRANCH`].
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn ready_for_reviews(
        &self,
        organization: &OrganizationName,
    ) -> Result<Vec<RepositoryName>, GatewayError> {
        info!(organization = organization.as_str(), "scanning organization");
        let repositories = self.client.list_organization_repositories(organization).await?;
        scan_organization(self.client, organization, &repositories).await
    }

    /// Pull requests labelled `ready for review` against [`MASTER_BRANCH`]
    /// in one organization repository.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::MissingPathSegments` for a blank name,
    /// `GatewayError::InvalidIdentifier` for a name that is not a single path
    /// segment, `GatewayError::NotFound` when the repository does not exist,
    /// and propagates other gateway failures.
    pub async fn ready_for_review_in(
        &self,
        organization: &OrganizationName,
        repository_name: &str,
    ) -> Result<Vec<PullRequestSummary>, GatewayError> {
        let name = RepositoryName::new(repository_name)?;
        let locator = organization.repository(name);
        info!(repository = %locator, "listing repository pull requests ready for review");
        self.client.repository(&locator).await?;
        list_labelled_pull_requests(
            self.client,
            &locator,
            &ListPullRequestsParams::open_against(MASTER_BRANCH),
            ReadyLabel::ForReview.as_str(),
        )
        .await
    }
}
