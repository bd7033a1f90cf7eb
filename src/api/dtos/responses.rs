use serde::Serialize;

use crate::domain::models::{member::Member, payment::Payment};
use crate::domain::services::billing::DueStatus;
use crate::domain::services::reporting::PaymentTotals;

/// Member as the UI consumes it: the stored record plus the computed
/// billing classification.
#[derive(Serialize)]
pub struct MemberView {
    #[serde(flatten)]
    pub member: Member,
    pub unpaid_months: i32,
    pub due_status: DueStatus,
}

#[derive(Serialize)]
pub struct RecordPaymentResponse {
    pub member: Member,
    pub payment: Payment,
}

#[derive(Serialize)]
pub struct PaymentHistoryResponse {
    pub payments: Vec<Payment>,
    pub totals: PaymentTotals,
}
