//! End-to-end tests for the generate facade

use pretty_assertions::assert_eq;
use timesheet_gen::{
    DayType, TimesheetError, TimesheetRequest, export_filename, generate, parse_day_list,
};

fn september_request() -> TimesheetRequest {
    TimesheetRequest {
        employee_name: "Prabhat Chaurasia".to_string(),
        month: 9,
        year: 2025,
        po_number: "PO12345".to_string(),
        project_id: "PRJ56789".to_string(),
        tata_manager_name: "Shripad".to_string(),
        client_manager_name: "Client Name".to_string(),
        monthly_rate: 100_000.0,
        contract_days: 22,
        leave_days: parse_day_list("2, 15"),
        holiday_days: parse_day_list("10, 25"),
    }
}

#[test]
fn generates_september_2025_timesheet() {
    let generated = generate(&september_request()).unwrap();

    assert_eq!(generated.filename, "Timesheet_September_2025.xlsx");
    assert_eq!(generated.record.days_in_month(), 30);
    assert_eq!(generated.billing.worked_days, 18);
    assert_eq!(generated.billing.billable_display(), "81818.18");
    assert_eq!(generated.billing.total_days(), 30);

    // Verify it's a valid XLSX file (starts with PK zip signature)
    assert!(generated.bytes.len() > 100);
    assert_eq!(&generated.bytes[0..2], b"PK");
}

#[test]
fn malformed_list_tokens_are_dropped_before_build() {
    let mut request = september_request();
    request.leave_days = parse_day_list("2, abc, 15, 40");
    let generated = generate(&request).unwrap();

    assert_eq!(generated.record.count(DayType::Leave), 2);
}

#[test]
fn invalid_month_aborts_without_output() {
    let mut request = september_request();
    request.month = 13;

    assert!(matches!(generate(&request), Err(TimesheetError::InvalidMonth(13))));
}

#[test]
fn zero_contract_days_aborts() {
    let mut request = september_request();
    request.contract_days = 0;

    assert!(matches!(generate(&request), Err(TimesheetError::DivisionByZero)));
}

#[test]
fn filename_uses_month_name_and_year() {
    assert_eq!(export_filename("February", 2024), "Timesheet_February_2024.xlsx");
}
