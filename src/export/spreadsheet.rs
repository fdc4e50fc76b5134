//! `.xlsx` writer for pull request summaries.

use rust_xlsxwriter::{Workbook, Worksheet};
use tracing::debug;

use crate::github::PullRequestSummary;

use super::error::ExportError;

/// Header row, in column order.
pub const HEADERS: [&str; 4] = ["Number", "Title", "Pull Request Link", "Author"];

/// MIME type of an `.xlsx` document.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Attachment name for the `ready for review` export.
pub const READY_FOR_REVIEW_FILENAME: &str = "ready_for_review_pull_requests.xlsx";

const NUMBER_COLUMN: u16 = 0;
const TITLE_COLUMN: u16 = 1;
const LINK_COLUMN: u16 = 2;
const AUTHOR_COLUMN: u16 = 3;

/// Writes `pull_requests` to a finished `.xlsx` document.
///
/// The returned buffer is a complete, closed workbook. An empty slice yields
/// a document holding only the header row.
///
/// # Errors
///
/// Returns [`ExportError::TooManyRows`] when the listing cannot fit in a
/// worksheet, [`ExportError::NumberOutOfRange`] for a pull request number
/// beyond `u32::MAX`, or [`ExportError::Workbook`] when the writer fails.
pub fn export_pull_requests(pull_requests: &[PullRequestSummary]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (column, header) in (0_u16..).zip(HEADERS) {
        worksheet.write_string(0, column, header)?;
    }

    for (index, pull_request) in pull_requests.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| ExportError::TooManyRows {
            rows: pull_requests.len(),
        })?;
        write_row(worksheet, row, pull_request)?;
    }

    let buffer = workbook.save_to_buffer()?;
    debug!(
        rows = pull_requests.len(),
        bytes = buffer.len(),
        "exported pull requests"
    );
    Ok(buffer)
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    pull_request: &PullRequestSummary,
) -> Result<(), ExportError> {
    let number =
        u32::try_from(pull_request.number).map_err(|_| ExportError::NumberOutOfRange {
            number: pull_request.number,
        })?;
    worksheet.write_number(row, NUMBER_COLUMN, number)?;
    worksheet.write_string(row, TITLE_COLUMN, &pull_request.title)?;
    worksheet.write_string(row, LINK_COLUMN, &pull_request.url)?;
    worksheet.write_string(row, AUTHOR_COLUMN, &pull_request.author_login)?;
    Ok(())
}
