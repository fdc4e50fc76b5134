//! HTML page rendering with embedded `minijinja` templates.
//!
//! Templates are compiled into the binary and registered once. Their names
//! end in `.html`, so interpolated values are HTML-escaped.
//!
//! Every page receives `generated_at` (RFC 3339) in addition to its own
//! variables.

use chrono::Utc;
use minijinja::{Environment, Value, context};
use thiserror::Error;

const TEMPLATES: [(&str, &str); 7] = [
    ("base.html", include_str!("../../templates/base.html")),
    (
        "_pull_requests.html",
        include_str!("../../templates/_pull_requests.html"),
    ),
    ("index.html", include_str!("../../templates/index.html")),
    (
        "ready_for_review.html",
        include_str!("../../templates/ready_for_review.html"),
    ),
    (
        "ready_for_release.html",
        include_str!("../../templates/ready_for_release.html"),
    ),
    ("releases.html", include_str!("../../templates/releases.html")),
    (
        "ready_for_reviews.html",
        include_str!("../../templates/ready_for_reviews.html"),
    ),
];

/// Errors raised while loading or rendering templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A template failed to parse or render.
    #[error("template {template} failed: {message}")]
    Template {
        /// Template name.
        template: String,
        /// Error detail from the template engine.
        message: String,
    },
}

/// Pages served by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    Index,
    /// Pull requests labelled `ready for review`.
    ReadyForReview,
    /// Pull requests labelled `ready for release`.
    ReadyForRelease,
    /// Tag summaries.
    Releases,
    /// Organization repositories awaiting review.
    ReadyForReviews,
}

impl Page {
    /// Template backing this page.
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::ReadyForReview => "ready_for_review.html",
            Self::ReadyForRelease => "ready_for_release.html",
            Self::Releases => "releases.html",
            Self::ReadyForReviews => "ready_for_reviews.html",
        }
    }
}

/// Renders dashboard pages from the embedded templates.
#[derive(Debug)]
pub struct PageRenderer {
    environment: Environment<'static>,
}

impl PageRenderer {
    /// Loads the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when a template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut environment = Environment::new();
        for (name, source) in TEMPLATES {
            environment
                .add_template(name, source)
                .map_err(|error| template_error(name, &error))?;
        }
        Ok(Self { environment })
    }

    /// Renders `page` with `data` merged into the shared context.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Template`] when rendering fails.
    pub fn render(&self, page: Page, data: Value) -> Result<String, RenderError> {
        let name = page.template_name();
        let template = self
            .environment
            .get_template(name)
            .map_err(|error| template_error(name, &error))?;
        let generated_at = Utc::now().to_rfc3339();
        template
            .render(context! { generated_at => generated_at, ..data })
            .map_err(|error| template_error(name, &error))
    }
}

fn template_error(template: &str, error: &minijinja::Error) -> RenderError {
    RenderError::Template {
        template: template.to_owned(),
        message: error.to_string(),
    }
}
