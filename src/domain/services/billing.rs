use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Due dates within this many days of today render as DUE SOON.
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;
/// Reminders fire when the due date is exactly this many days away.
pub const REMINDER_LEAD_DAYS: i64 = 3;
/// Members at or past this many unpaid months get archived by the sweep.
pub const ARCHIVE_THRESHOLD_MONTHS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DueStatus {
    #[serde(rename = "NO DATE")]
    NoDate,
    #[serde(rename = "OVERDUE")]
    Overdue,
    #[serde(rename = "DUE TODAY")]
    DueToday,
    #[serde(rename = "DUE SOON")]
    DueSoon,
    #[serde(rename = "OK")]
    Ok,
}

impl DueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::NoDate => "NO DATE",
            DueStatus::Overdue => "OVERDUE",
            DueStatus::DueToday => "DUE TODAY",
            DueStatus::DueSoon => "DUE SOON",
            DueStatus::Ok => "OK",
        }
    }
}

/// Last-birthday age in whole years.
pub fn age(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Number of billing cycles elapsed without payment. The current partial
/// month counts as one unpaid unit: being a single day overdue yields 1.
pub fn unpaid_months(next_due: Option<NaiveDate>, today: NaiveDate) -> i32 {
    let Some(due) = next_due else { return 0 };
    if today <= due {
        return 0;
    }

    let diff_months =
        (today.year() - due.year()) * 12 + (today.month() as i32 - due.month() as i32);

    diff_months + 1
}

/// Day-granularity classification of a member's due date relative to today.
pub fn due_status(next_due: Option<NaiveDate>, today: NaiveDate) -> DueStatus {
    let Some(due) = next_due else {
        return DueStatus::NoDate;
    };

    let diff_days = (due - today).num_days();

    if diff_days < 0 {
        DueStatus::Overdue
    } else if diff_days == 0 {
        DueStatus::DueToday
    } else if diff_days <= DUE_SOON_WINDOW_DAYS {
        DueStatus::DueSoon
    } else {
        DueStatus::Ok
    }
}

/// Advance a due date by exactly one calendar month. The day-of-month is
/// kept, clamped to the target month's last day when it doesn't exist
/// (Jan 31 -> Feb 28/29).
pub fn roll_forward_due_date(base: NaiveDate) -> NaiveDate {
    base.checked_add_months(Months::new(1)).unwrap_or(base)
}
