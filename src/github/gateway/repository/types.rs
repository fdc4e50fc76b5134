//! Public types for repository gateway operations.

/// Pull request state filter for listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullRequestState {
    /// Only open pull requests.
    #[default]
    Open,
    /// Only closed pull requests.
    Closed,
    /// All pull requests regardless of state.
    All,
}

impl PullRequestState {
    /// Returns the API parameter value for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

/// Sort key accepted by the pull request listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullRequestSort {
    /// By creation time.
    Created,
    /// By last update time.
    Updated,
    /// By comment count.
    Popularity,
    /// By age, filtering out pull requests updated in the last month.
    LongRunning,
}

impl PullRequestSort {
    /// Returns the API parameter value for this sort key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Popularity => "popularity",
            Self::LongRunning => "long-running",
        }
    }
}

/// Parameters for listing pull requests.
///
/// The default lists every open pull request in GitHub's default order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPullRequestsParams {
    /// Filter by state (open, closed, all).
    pub state: PullRequestState,
    /// Sort key; GitHub sorts by creation time when absent.
    pub sort: Option<PullRequestSort>,
    /// Restrict to pull requests targeting this base branch.
    pub base: Option<String>,
}

impl ListPullRequestsParams {
    /// Open pull requests against `base`, sorted by creation time.
    #[must_use]
    pub fn open_against(base: &str) -> Self {
        Self {
            state: PullRequestState::Open,
            sort: Some(PullRequestSort::Created),
            base: Some(base.to_owned()),
        }
    }

    /// Query pairs sent to the listing endpoint.
    pub(crate) fn query_pairs(&self, per_page: u8) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("state", self.state.as_str().to_owned()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_owned()));
        }
        if let Some(base) = &self.base {
            pairs.push(("base", base.clone()));
        }
        pairs
    }
}
