//! Spreadsheet export of pull request listings.
//!
//! Exports produce a single-worksheet `.xlsx` document held entirely in
//! memory. The header row is fixed:
//!
//! | Number | Title | Pull Request Link | Author |
//!
//! and row `i + 1` holds the `i`-th pull request in input order.

mod error;
mod spreadsheet;

pub use error::ExportError;
pub use spreadsheet::{
    HEADERS, READY_FOR_REVIEW_FILENAME, XLSX_CONTENT_TYPE, export_pull_requests,
};
