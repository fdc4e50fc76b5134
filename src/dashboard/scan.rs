//! Organization-wide scan for repositories awaiting review.

use tracing::debug;

use super::labels::{ReadyLabel, list_labelled_pull_requests};
use crate::github::{
    GatewayError, ListPullRequestsParams, OrganizationName, Repository, RepositoryGateway,
    RepositoryName,
};

/// Base branch the organization scan and per-repository page look at.
pub const MASTER_BRANCH: &str = "master";

/// Returns the repositories with at least one open pull request against
/// [`MASTER_BRANCH`] labelled `ready for review`.
///
/// Output order follows `repositories`.
///
/// # Errors
///
/// Returns `GatewayError::MissingPathSegments` for a repository with a blank
/// name, and propagates gateway failures.
pub async fn scan_organization<G>(
    gateway: &G,
    organization: &OrganizationName,
    repositories: &[Repository],
) -> Result<Vec<RepositoryName>, GatewayError>
where
    G: RepositoryGateway + ?Sized,
{
    let params = ListPullRequestsParams::open_against(MASTER_BRANCH);
    let mut ready = Vec::new();
    for repository in repositories {
        let name = RepositoryName::new(&repository.name)?;
        let locator = organization.repository(name.clone());
        let pulls = list_labelled_pull_requests(
            gateway,
            &locator,
            &params,
            ReadyLabel::ForReview.as_str(),
        )
        .await?;
        if !pulls.is_empty() {
            ready.push(name);
        }
    }
    debug!(
        organization = organization.as_str(),
        scanned = repositories.len(),
        ready = ready.len(),
        "scanned organization"
    );
    Ok(ready)
}
