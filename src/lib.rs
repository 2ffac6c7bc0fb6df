//! Monthly attendance timesheet generator.
//!
//! Classifies every day of a month as worked, weekend, holiday or leave,
//! prorates the monthly rate by worked days and renders a styled XLSX sheet.

pub mod billing;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod sheet;
pub mod timesheet;

pub use billing::{BillingSummary, compute_billing};
pub use error::{Result, TimesheetError};
pub use input::{TimesheetRequest, parse_day_list};
pub use render::render;
pub use sheet::{RenderMetadata, SheetModel, layout};
pub use timesheet::{DayEntry, DayType, TimesheetRecord, build};

use tracing::debug;

/// Everything handed back to the caller for one request.
#[derive(Debug, Clone)]
pub struct GeneratedTimesheet {
    pub record: TimesheetRecord,
    pub billing: BillingSummary,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Build, bill and render a timesheet in one call.
pub fn generate(request: &TimesheetRequest) -> Result<GeneratedTimesheet> {
    let record = build(
        &request.employee_name,
        request.month,
        request.year,
        &request.leave_days,
        &request.holiday_days,
    )?;
    let billing = compute_billing(&record, request.contract_days, request.monthly_rate)?;

    let meta = RenderMetadata::new(
        &request.po_number,
        &request.project_id,
        &request.tata_manager_name,
        &request.client_manager_name,
    );
    let bytes = render(&record, &meta)?;
    let filename = export_filename(record.month_name(), record.year());

    debug!(%filename, "generated timesheet");

    Ok(GeneratedTimesheet {
        record,
        billing,
        filename,
        bytes,
    })
}

/// Download name for a rendered timesheet, e.g. `Timesheet_September_2025.xlsx`.
pub fn export_filename(month_name: &str, year: i32) -> String {
    format!("Timesheet_{month_name}_{year}.xlsx")
}
