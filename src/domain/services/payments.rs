use chrono::NaiveDate;

use crate::domain::models::member::{Member, STATUS_ACTIVE};
use crate::domain::models::payment::{self, Payment};
use crate::domain::services::billing::roll_forward_due_date;
use crate::error::AppError;

/// Apply a payment to a member, producing the updated member and the
/// immutable payment row. No writes happen here; the caller persists both
/// in one transaction.
///
/// The rollover baseline is the member's current due date when set,
/// otherwise today. An early payment therefore never shortens the next
/// cycle, and a late payment advances exactly one month from the missed
/// due date (catch-up: the member stays behind until enough payments are
/// recorded).
pub fn apply_payment(
    member: &Member,
    amount: i64,
    method: &str,
    payment_type: &str,
    today: NaiveDate,
) -> Result<(Member, Payment), AppError> {
    if amount <= 0 {
        return Err(AppError::InvalidAmount);
    }
    if !payment::is_valid_method(method) {
        return Err(AppError::Validation(format!("Unknown payment method: {}", method)));
    }
    if !payment::is_valid_type(payment_type) {
        return Err(AppError::Validation(format!("Unknown payment type: {}", payment_type)));
    }

    let baseline = member.next_due_date.unwrap_or(today);

    let mut updated = member.clone();
    updated.last_paid_date = Some(today);
    updated.next_due_date = Some(roll_forward_due_date(baseline));
    // Any payment re-activates, even 3+ months behind.
    updated.status = STATUS_ACTIVE.to_string();

    let record = Payment::new(
        member.id.clone(),
        member.name.clone(),
        amount,
        today,
        method.to_string(),
        payment_type.to_string(),
    );

    Ok((updated, record))
}
