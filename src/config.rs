use chrono::{Datelike, Local, NaiveDate};
use std::env;
use std::path::PathBuf;

/// Form defaults, overridable through the environment or a `.env` file.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub employee_name: String,
    pub month: u32,
    pub year: i32,
    pub po_number: String,
    pub project_id: String,
    pub tata_manager_name: String,
    pub client_manager_name: String,
    pub monthly_rate: f64,
    pub contract_days: u32,
    pub leave_days: String,
    pub holiday_days: String,
    pub output_dir: PathBuf,
}

impl Default for FormDefaults {
    fn default() -> Self {
        let (year, month) = previous_month(Local::now().date_naive());
        Self {
            employee_name: "Prabhat Chaurasia".to_string(),
            month,
            year,
            po_number: "PO12345".to_string(),
            project_id: "PRJ56789".to_string(),
            tata_manager_name: "Shripad".to_string(),
            client_manager_name: "Client Name".to_string(),
            monthly_rate: 100_000.0,
            contract_days: 22,
            leave_days: "2, 15".to_string(),
            holiday_days: "10, 25".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl FormDefaults {
    /// Read `TIMESHEET_*` variables on top of the built-in defaults.
    ///
    /// Call `dotenv().ok()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = Self::default();
        let text = |key: &str, fallback: String| lookup(key).unwrap_or(fallback);

        Self {
            employee_name: text("TIMESHEET_EMPLOYEE_NAME", base.employee_name),
            po_number: text("TIMESHEET_PO_NUMBER", base.po_number),
            project_id: text("TIMESHEET_PROJECT_ID", base.project_id),
            tata_manager_name: text("TIMESHEET_TATA_MANAGER", base.tata_manager_name),
            client_manager_name: text("TIMESHEET_CLIENT_MANAGER", base.client_manager_name),
            monthly_rate: lookup("TIMESHEET_MONTHLY_RATE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(base.monthly_rate),
            contract_days: lookup("TIMESHEET_CONTRACT_DAYS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(base.contract_days),
            output_dir: lookup("TIMESHEET_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(base.output_dir),
            ..base
        }
    }
}

/// Year and month of the calendar month before `today`.
pub fn previous_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn previous_month_wraps_year() {
        let jan = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(previous_month(jan), (2025, 12));

        let oct = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        assert_eq!(previous_month(oct), (2026, 9));
    }

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TIMESHEET_EMPLOYEE_NAME", "Jane Doe"),
            ("TIMESHEET_CONTRACT_DAYS", "20"),
            ("TIMESHEET_OUTPUT_DIR", "/tmp/sheets"),
        ]);
        let defaults = FormDefaults::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(defaults.employee_name, "Jane Doe");
        assert_eq!(defaults.contract_days, 20);
        assert_eq!(defaults.output_dir, PathBuf::from("/tmp/sheets"));
        assert_eq!(defaults.po_number, "PO12345");
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let defaults = FormDefaults::from_lookup(|k| match k {
            "TIMESHEET_MONTHLY_RATE" => Some("lots".to_string()),
            "TIMESHEET_CONTRACT_DAYS" => Some("-1".to_string()),
            _ => None,
        });

        assert_eq!(defaults.monthly_rate, 100_000.0);
        assert_eq!(defaults.contract_days, 22);
    }
}
