use crate::domain::models::member::Member;
use crate::domain::ports::ReminderNotifier;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::info;

/// Log-only reminder channel. Stands in for an SMS/push gateway; actual
/// delivery is out of scope, so this just records what would be sent.
pub struct LogNotifier;

#[async_trait]
impl ReminderNotifier for LogNotifier {
    async fn deliver(&self, member: &Member, due_on: NaiveDate) -> Result<(), AppError> {
        info!(
            member_id = %member.id,
            phone = member.phone.as_deref().unwrap_or("-"),
            due_on = %due_on,
            "Reminder due: membership payment for {} due on {}",
            member.name,
            due_on
        );
        Ok(())
    }
}
