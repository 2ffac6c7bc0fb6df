use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Errors that abort a timesheet request.
#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("contract days must be at least 1")]
    DivisionByZero,

    #[error("failed to render spreadsheet: {0}")]
    RenderFailure(#[from] XlsxError),
}

pub type Result<T> = std::result::Result<T, TimesheetError>;
