use std::collections::BTreeSet;

/// Every field the timesheet form collects, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetRequest {
    pub employee_name: String,
    pub month: u32,
    pub year: i32,
    pub po_number: String,
    pub project_id: String,
    pub tata_manager_name: String,
    pub client_manager_name: String,
    pub monthly_rate: f64,
    pub contract_days: u32,
    pub leave_days: BTreeSet<u32>,
    pub holiday_days: BTreeSet<u32>,
}

/// Parse a comma separated day list such as "2, 15".
///
/// Tokens that are not plain unsigned integers are dropped without error.
pub fn parse_day_list(input: &str) -> BTreeSet<u32> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|t| t.parse().ok())
        .collect()
}
