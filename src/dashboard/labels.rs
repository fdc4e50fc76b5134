//! Label-based pull request filtering.

use tracing::debug;

use crate::github::{
    GatewayError, Label, ListPullRequestsParams, PullRequestSummary, RepositoryGateway,
    RepositoryLocator,
};

/// Labels the dashboard reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyLabel {
    /// `ready for review`
    ForReview,
    /// `ready for release`
    ForRelease,
}

impl ReadyLabel {
    /// Exact label name as it appears on GitHub.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForReview => "ready for review",
            Self::ForRelease => "ready for release",
        }
    }
}

/// Returns true when `labels` contains `label_name`, compared exactly.
#[must_use]
pub fn has_label(labels: &[Label], label_name: &str) -> bool {
    labels.iter().any(|label| label.name == label_name)
}

/// Keeps the pull requests whose labels include `label_name`.
///
/// Labels are fetched per pull request through the gateway. Matching is
/// exact and case-sensitive, and the input order is preserved. An empty
/// result is not an error.
///
/// # Errors
///
/// Propagates the first gateway failure while fetching labels.
pub async fn filter_by_label<G>(
    gateway: &G,
    locator: &RepositoryLocator,
    pull_requests: &[PullRequestSummary],
    label_name: &str,
) -> Result<Vec<PullRequestSummary>, GatewayError>
where
    G: RepositoryGateway + ?Sized,
{
    let mut retained = Vec::new();
    for pull_request in pull_requests {
        let labels = gateway.list_labels(locator, pull_request.number).await?;
        if has_label(&labels, label_name) {
            retained.push(pull_request.clone());
        }
    }

    debug!(
        repository = %locator,
        label = label_name,
        scanned = pull_requests.len(),
        retained = retained.len(),
        "filtered pull requests by label"
    );
    Ok(retained)
}

/// Lists pull requests with `params` and keeps those carrying `label_name`.
///
/// # Errors
///
/// Propagates gateway failures from the listing or the label lookups.
pub async fn list_labelled_pull_requests<G>(
    gateway: &G,
    locator: &RepositoryLocator,
    params: &ListPullRequestsParams,
    label_name: &str,
) -> Result<Vec<PullRequestSummary>, GatewayError>
where
    G: RepositoryGateway + ?Sized,
{
    let pull_requests = gateway.list_pull_requests(locator, params).await?;
    filter_by_label(gateway, locator, &pull_requests, label_name).await
}
