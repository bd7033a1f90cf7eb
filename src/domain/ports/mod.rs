use crate::domain::models::{member::Member, payment::Payment, user::User};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a member together with its initial payment rows (registration
    /// and/or first membership fee) as one transaction.
    async fn create_with_payments(
        &self,
        member: &Member,
        payments: Vec<Payment>,
    ) -> Result<Member, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError>;
    async fn find_by_phone(&self, phone: &str) -> Result<Option<Member>, AppError>;
    /// Full listing, optionally narrowed to a name/phone search term.
    async fn list(&self, search: Option<&str>) -> Result<Vec<Member>, AppError>;
    async fn update(&self, member: &Member) -> Result<Member, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn set_status(&self, id: &str, status: &str) -> Result<(), AppError>;
    async fn mark_reminder_sent(&self, id: &str, date: NaiveDate) -> Result<(), AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert the payment row and apply the member's billing rollover
    /// (last_paid_date, next_due_date, status) in one transaction, so a
    /// partial write can never leave the two out of step.
    async fn record_for_member(
        &self,
        payment: &Payment,
        member: &Member,
    ) -> Result<Payment, AppError>;
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Payment>, AppError>;
    async fn list_all(&self) -> Result<Vec<Payment>, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_phone_and_pin(
        &self,
        phone: &str,
        pin: &str,
    ) -> Result<Option<User>, AppError>;
}

/// Delivery seam for due-date reminders. The shipped implementation only
/// logs; swapping in a real SMS/push gateway is a deployment concern.
#[async_trait]
pub trait ReminderNotifier: Send + Sync {
    async fn deliver(&self, member: &Member, due_on: NaiveDate) -> Result<(), AppError>;
}
