use chrono::NaiveDate;

use crate::domain::models::member::Member;
use crate::domain::services::billing::{
    unpaid_months, ARCHIVE_THRESHOLD_MONTHS, REMINDER_LEAD_DAYS,
};

/// What the sweep should do for one member. Both flags false means the
/// member is left untouched, which keeps re-running the sweep a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepAction {
    pub remind: bool,
    pub archive: bool,
}

impl SweepAction {
    pub fn is_noop(&self) -> bool {
        !self.remind && !self.archive
    }
}

/// Classify one member for the periodic sweep.
///
/// A reminder is due when the member's due date is exactly
/// `REMINDER_LEAD_DAYS` away and no reminder was stamped before. Archival
/// triggers at `ARCHIVE_THRESHOLD_MONTHS` unpaid months and is one-way:
/// the sweep never reverts it, only a payment does.
pub fn assess(member: &Member, today: NaiveDate) -> SweepAction {
    let remind = match member.next_due_date {
        Some(due) => {
            (due - today).num_days() == REMINDER_LEAD_DAYS && member.last_reminder_sent.is_none()
        }
        None => false,
    };

    let archive = unpaid_months(member.next_due_date, today) >= ARCHIVE_THRESHOLD_MONTHS
        && !member.is_archived();

    SweepAction { remind, archive }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::member::{Member, NewMemberParams, STATUS_ARCHIVED, TYPE_NEW};
    use crate::domain::services::billing::roll_forward_due_date;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn member_due(next_due: Option<NaiveDate>) -> Member {
        Member::new(NewMemberParams {
            name: "Asha".to_string(),
            phone: Some("9876500001".to_string()),
            dob: None,
            age: None,
            id_type: None,
            id_number: None,
            registration_fee: 500,
            membership_fee: 1000,
            member_type: TYPE_NEW.to_string(),
            registration_date: Some(d(2024, 1, 1)),
            last_paid_date: Some(d(2024, 1, 1)),
            next_due_date: next_due,
        })
    }

    #[test]
    fn test_reminder_fires_exactly_three_days_out() {
        let m = member_due(Some(d(2024, 3, 13)));
        assert!(assess(&m, d(2024, 3, 10)).remind);
        assert!(!assess(&m, d(2024, 3, 11)).remind);
        assert!(!assess(&m, d(2024, 3, 9)).remind);
    }

    #[test]
    fn test_reminder_suppressed_once_stamped() {
        let mut m = member_due(Some(d(2024, 3, 13)));
        m.last_reminder_sent = Some(d(2024, 3, 10));
        assert!(!assess(&m, d(2024, 3, 10)).remind);
    }

    #[test]
    fn test_archives_at_threshold() {
        // Due 2024-01-01, today 2024-04-02 -> 4 unpaid months.
        let m = member_due(Some(d(2024, 1, 1)));
        assert!(assess(&m, d(2024, 4, 2)).archive);
    }

    #[test]
    fn test_no_archive_below_threshold() {
        let m = member_due(Some(d(2024, 1, 1)));
        // 2 unpaid months only.
        assert!(!assess(&m, d(2024, 2, 15)).archive);
    }

    #[test]
    fn test_archived_member_is_left_alone() {
        let mut m = member_due(Some(d(2024, 1, 1)));
        m.status = STATUS_ARCHIVED.to_string();
        let action = assess(&m, d(2024, 4, 2));
        assert!(!action.archive);
        assert!(action.is_noop());
    }

    #[test]
    fn test_no_due_date_is_noop() {
        let m = member_due(None);
        assert!(assess(&m, d(2024, 4, 2)).is_noop());
    }

    #[test]
    fn test_new_member_never_paying_gets_archived() {
        // Registered 2024-01-15, first due 2024-02-15, no payments since.
        let due = roll_forward_due_date(d(2024, 1, 15));
        assert_eq!(due, d(2024, 2, 15));
        let m = member_due(Some(due));

        let today = d(2024, 5, 16);
        assert_eq!(unpaid_months(m.next_due_date, today), 4);
        assert!(assess(&m, today).archive);
    }
}
