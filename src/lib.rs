//! readyboard: a GitHub pull request and release dashboard.
//!
//! The library lists a repository's open pull requests carrying the
//! `ready for review` or `ready for release` labels, summarises its release
//! tags, scans an organization for repositories awaiting review, and exports
//! listings as `.xlsx` spreadsheets. The [`web`] module serves all of this as
//! HTML pages.

pub mod config;
pub mod dashboard;
pub mod export;
pub mod github;
pub mod web;

pub use config::ReadyBoardConfig;
pub use dashboard::{
    Dashboard, ReadyLabel, TagSummary, filter_by_label, scan_organization, summarize_tags,
};
pub use export::{ExportError, export_pull_requests};
#[cfg(any(test, feature = "test-support"))]
pub use github::FakeGateway;
pub use github::{
    GatewayError, OctocrabRepositoryGateway, OrganizationName, PersonalAccessToken,
    PullRequestSummary, RepositoryGateway, RepositoryLocator, RepositoryName,
};
pub use web::{AppState, PageError, SharedState, build_router, serve};
