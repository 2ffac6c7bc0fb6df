//! Calendar row for one employee and one month.
//!
//! Every day of the month is classified exactly once, by strict precedence:
//! weekend first, then holiday, then leave, otherwise worked.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;
use tracing::debug;

use crate::error::{Result, TimesheetError};

/// How a single day is accounted for on the timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    Worked,
    Weekend,
    Holiday,
    Leave,
}

impl DayType {
    /// Cell marker for non-worked days. Worked days are written as the number 1.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            DayType::Worked => None,
            DayType::Weekend => Some("WO"),
            DayType::Holiday => Some("H"),
            DayType::Leave => Some("L"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEntry {
    pub day: u32,
    pub weekday: Weekday,
    pub kind: DayType,
}

impl DayEntry {
    pub fn weekday_abbrev(&self) -> &'static str {
        weekday_abbrev(self.weekday)
    }

    /// Column label used in the header row, e.g. "2 Tue".
    pub fn label(&self) -> String {
        format!("{} {}", self.day, self.weekday_abbrev())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetRecord {
    employee_name: String,
    month: u32,
    year: i32,
    days: Vec<DayEntry>,
}

impl TimesheetRecord {
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    pub fn count(&self, kind: DayType) -> u32 {
        self.days.iter().filter(|d| d.kind == kind).count() as u32
    }

    pub fn month_name(&self) -> &'static str {
        // month is validated on construction
        month_name(self.month).unwrap_or_default()
    }
}

/// Build the timesheet row for `month`/`year`.
///
/// Leave and holiday values that fall outside the month never match a day and
/// are ignored.
pub fn build(
    employee_name: &str,
    month: u32,
    year: i32,
    leave_days: &BTreeSet<u32>,
    holiday_days: &BTreeSet<u32>,
) -> Result<TimesheetRecord> {
    let last_day = days_in_month(year, month)?;

    let mut days = Vec::with_capacity(last_day as usize);
    for day in 1..=last_day {
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(TimesheetError::InvalidMonth(month))?;
        let weekday = date.weekday();
        days.push(DayEntry {
            day,
            weekday,
            kind: classify(weekday, day, leave_days, holiday_days),
        });
    }

    debug!(employee = employee_name, month, year, days = days.len(), "built timesheet row");

    Ok(TimesheetRecord {
        employee_name: employee_name.to_string(),
        month,
        year,
        days,
    })
}

fn classify(
    weekday: Weekday,
    day: u32,
    leave_days: &BTreeSet<u32>,
    holiday_days: &BTreeSet<u32>,
) -> DayType {
    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        DayType::Weekend
    } else if holiday_days.contains(&day) {
        DayType::Holiday
    } else if leave_days.contains(&day) {
        DayType::Leave
    } else {
        DayType::Worked
    }
}

/// Number of days in the month, taken as the day before the 1st of the next month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(TimesheetError::InvalidMonth(month));
    }

    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year.checked_add(1) } else { Some(year) };

    next_year
        .and_then(|y| NaiveDate::from_ymd_opt(y, next_month, 1))
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .ok_or(TimesheetError::InvalidMonth(month))
}

pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn month_name(month: u32) -> Option<&'static str> {
    let name = match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(days: &[u32]) -> BTreeSet<u32> {
        days.iter().copied().collect()
    }

    fn kind_of(record: &TimesheetRecord, day: u32) -> DayType {
        record.days()[(day - 1) as usize].kind
    }

    #[test]
    fn day_count_matches_gregorian_calendar() {
        let expected_2023 = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &expected) in expected_2023.iter().enumerate() {
            let month = i as u32 + 1;
            let record = build("A", month, 2023, &set(&[]), &set(&[])).unwrap();
            assert_eq!(record.days_in_month(), expected, "month {month}");
            assert_eq!(record.days().first().unwrap().day, 1);
            assert_eq!(record.days().last().unwrap().day, expected);
        }
    }

    #[test]
    fn leap_february_has_29_days() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2100, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    }

    #[test]
    fn rejects_month_out_of_range() {
        assert!(matches!(
            build("A", 0, 2025, &set(&[]), &set(&[])),
            Err(TimesheetError::InvalidMonth(0))
        ));
        assert!(matches!(
            build("A", 13, 2025, &set(&[]), &set(&[])),
            Err(TimesheetError::InvalidMonth(13))
        ));
    }

    #[test]
    fn september_2025_scenario() {
        let record = build("Prabhat Chaurasia", 9, 2025, &set(&[2, 15]), &set(&[10, 25])).unwrap();

        assert_eq!(record.days_in_month(), 30);
        assert_eq!(record.days()[0].weekday, Weekday::Mon);
        assert_eq!(record.days()[1].label(), "2 Tue");

        assert_eq!(kind_of(&record, 2), DayType::Leave);
        assert_eq!(kind_of(&record, 15), DayType::Leave);
        assert_eq!(kind_of(&record, 10), DayType::Holiday);
        assert_eq!(kind_of(&record, 25), DayType::Holiday);
        for weekend in [6, 7, 13, 14, 20, 21, 27, 28] {
            assert_eq!(kind_of(&record, weekend), DayType::Weekend, "day {weekend}");
        }

        assert_eq!(record.count(DayType::Worked), 18);
        assert_eq!(record.count(DayType::Weekend), 8);
        assert_eq!(record.month_name(), "September");
    }

    #[test]
    fn holiday_wins_over_leave() {
        // 2025-09-03 is a Wednesday
        let record = build("A", 9, 2025, &set(&[3]), &set(&[3])).unwrap();
        assert_eq!(kind_of(&record, 3), DayType::Holiday);
        assert_eq!(record.count(DayType::Leave), 0);
    }

    #[test]
    fn weekend_wins_over_holiday_and_leave() {
        // 2025-09-06 is a Saturday, 2025-09-07 a Sunday
        let record = build("A", 9, 2025, &set(&[6, 7]), &set(&[6, 7])).unwrap();
        assert_eq!(kind_of(&record, 6), DayType::Weekend);
        assert_eq!(kind_of(&record, 7), DayType::Weekend);
        assert_eq!(record.count(DayType::Holiday), 0);
        assert_eq!(record.count(DayType::Leave), 0);
    }

    #[test]
    fn out_of_range_days_are_ignored() {
        let record = build("A", 2, 2025, &set(&[0, 29, 31, 400]), &set(&[30])).unwrap();
        assert_eq!(record.days_in_month(), 28);
        assert_eq!(record.count(DayType::Leave), 0);
        assert_eq!(record.count(DayType::Holiday), 0);
    }

    #[test]
    fn build_is_idempotent() {
        let first = build("A", 3, 2024, &set(&[4, 5]), &set(&[12])).unwrap();
        let second = build("A", 3, 2024, &set(&[4, 5]), &set(&[12])).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_day_is_classified_once() {
        for month in 1..=12 {
            let record = build("A", month, 2024, &set(&[1, 2, 3]), &set(&[3, 4])).unwrap();
            let total = record.count(DayType::Worked)
                + record.count(DayType::Weekend)
                + record.count(DayType::Holiday)
                + record.count(DayType::Leave);
            assert_eq!(total, record.days_in_month());
        }
    }
}
