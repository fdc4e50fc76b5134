//! Error types for spreadsheet export.

use thiserror::Error;

/// Errors returned while building a spreadsheet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    /// The workbook writer rejected a cell or failed to serialise.
    #[error("failed to write spreadsheet: {message}")]
    Workbook {
        /// Error detail from the workbook writer.
        message: String,
    },

    /// A pull request number does not fit a worksheet cell.
    #[error("pull request number {number} is out of range")]
    NumberOutOfRange {
        /// The offending pull request number.
        number: u64,
    },

    /// The listing has more rows than a worksheet can hold.
    #[error("too many rows for one worksheet: {rows}")]
    TooManyRows {
        /// Number of data rows requested.
        rows: usize,
    },
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook {
            message: error.to_string(),
        }
    }
}
