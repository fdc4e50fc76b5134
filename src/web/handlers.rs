//! Route handlers for the dashboard pages.

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use http::header;
use minijinja::context;
use serde::Deserialize;

use crate::dashboard::Dashboard;
use crate::export::{READY_FOR_REVIEW_FILENAME, XLSX_CONTENT_TYPE, export_pull_requests};

use super::error::PageError;
use super::render::Page;
use super::SharedState;

/// `download` value that turns the listing into a spreadsheet.
pub const EXCEL_DOWNLOAD: &str = "excel";

/// Query string accepted by `GET /ready-for-review`.
#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    /// `excel` requests the spreadsheet; anything else renders HTML.
    pub download: Option<String>,
}

impl DownloadQuery {
    fn wants_excel(&self) -> bool {
        self.download.as_deref() == Some(EXCEL_DOWNLOAD)
    }
}

#[expect(
    clippy::unused_async,
    reason = "axum handlers must be async even when rendering synchronously"
)]
pub(super) async fn index(State(state): State<SharedState>) -> Result<Html<String>, PageError> {
    Ok(Html(state.renderer.render(Page::Index, context! {})?))
}

pub(super) async fn ready_for_review(
    State(state): State<SharedState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, PageError> {
    let pulls = Dashboard::new(state.gateway.as_ref())
        .ready_for_review(state.repository())
        .await?;

    if query.wants_excel() {
        let workbook = export_pull_requests(&pulls)?;
        return Ok(attachment(workbook, READY_FOR_REVIEW_FILENAME));
    }

    let html = state.renderer.render(
        Page::ReadyForReview,
        context! {
            owner => state.repository().owner().as_str(),
            repository => state.repository().repository().as_str(),
            pull_requests => pulls,
            downloadable => true,
        },
    )?;
    Ok(Html(html).into_response())
}

pub(super) async fn refresh_ready_for_review(
    state: State<SharedState>,
) -> Result<Response, PageError> {
    ready_for_review(state, Query(DownloadQuery::default())).await
}

pub(super) async fn ready_for_release(
    State(state): State<SharedState>,
) -> Result<Html<String>, PageError> {
    let pulls = Dashboard::new(state.gateway.as_ref())
        .ready_for_release(state.repository())
        .await?;

    let html = state.renderer.render(
        Page::ReadyForRelease,
        context! {
            owner => state.repository().owner().as_str(),
            repository => state.repository().repository().as_str(),
            pull_requests => pulls,
        },
    )?;
    Ok(Html(html))
}

pub(super) async fn releases(State(state): State<SharedState>) -> Result<Html<String>, PageError> {
    let tags = Dashboard::new(state.gateway.as_ref())
        .releases(state.repository())
        .await?;

    let html = state.renderer.render(
        Page::Releases,
        context! {
            owner => state.repository().owner().as_str(),
            repository => state.repository().repository().as_str(),
            tags => tags,
        },
    )?;
    Ok(Html(html))
}

pub(super) async fn ready_for_reviews(
    State(state): State<SharedState>,
) -> Result<Html<String>, PageError> {
    let repositories = Dashboard::new(state.gateway.as_ref())
        .ready_for_reviews(state.organization())
        .await?;

    let html = state.renderer.render(
        Page::ReadyForReviews,
        context! {
            organization => state.organization().as_str(),
            repositories => repositories,
        },
    )?;
    Ok(Html(html))
}

pub(super) async fn ready_for_review_in(
    State(state): State<SharedState>,
    Path(repo_name): Path<String>,
) -> Result<Html<String>, PageError> {
    let pulls = Dashboard::new(state.gateway.as_ref())
        .ready_for_review_in(state.organization(), &repo_name)
        .await?;

    let html = state.renderer.render(
        Page::ReadyForReview,
        context! {
            owner => state.organization().as_str(),
            repository => repo_name.trim(),
            pull_requests => pulls,
            downloadable => false,
        },
    )?;
    Ok(Html(html))
}

fn attachment(body: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        body,
    )
        .into_response()
}
