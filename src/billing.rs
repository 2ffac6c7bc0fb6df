use std::fmt;
use tracing::info;

use crate::error::{Result, TimesheetError};
use crate::timesheet::{DayType, TimesheetRecord};

/// Day tally and prorated pay for one timesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct BillingSummary {
    pub worked_days: u32,
    pub weekend_days: u32,
    pub holiday_days: u32,
    pub leave_days: u32,
    pub billable_amount: f64,
}

/// Prorate `monthly_rate` by the share of contract days actually worked.
pub fn compute_billing(
    record: &TimesheetRecord,
    contract_days: u32,
    monthly_rate: f64,
) -> Result<BillingSummary> {
    if contract_days == 0 {
        return Err(TimesheetError::DivisionByZero);
    }

    let worked_days = record.count(DayType::Worked);
    let billable_amount = f64::from(worked_days) / f64::from(contract_days) * monthly_rate;

    info!(worked_days, contract_days, billable_amount, "computed billing");

    Ok(BillingSummary {
        worked_days,
        weekend_days: record.count(DayType::Weekend),
        holiday_days: record.count(DayType::Holiday),
        leave_days: record.count(DayType::Leave),
        billable_amount,
    })
}

impl BillingSummary {
    pub fn total_days(&self) -> u32 {
        self.worked_days + self.weekend_days + self.holiday_days + self.leave_days
    }

    pub fn billable_display(&self) -> String {
        format!("{:.2}", self.billable_amount)
    }
}

impl fmt::Display for BillingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Worked Days: {}, Billable Amount: {:.2}",
            self.worked_days, self.billable_amount
        )
    }
}
