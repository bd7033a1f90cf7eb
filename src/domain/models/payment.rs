use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const METHODS: [&str; 3] = ["cash", "upi", "online"];
pub const TYPE_REGISTRATION: &str = "registration";
pub const TYPE_MEMBERSHIP: &str = "membership";

/// A recorded transaction. Append-only: rows are never updated or deleted,
/// even when the member they reference is removed.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Payment {
    pub id: String,
    pub member_id: String,
    pub member_name: String,
    pub amount: i64,
    pub paid_on: NaiveDate,
    pub method: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        member_id: String,
        member_name: String,
        amount: i64,
        paid_on: NaiveDate,
        method: String,
        payment_type: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            member_name,
            amount,
            paid_on,
            method,
            payment_type,
            created_at: Utc::now(),
        }
    }
}

pub fn is_valid_method(method: &str) -> bool {
    METHODS.contains(&method)
}

pub fn is_valid_type(payment_type: &str) -> bool {
    payment_type == TYPE_REGISTRATION || payment_type == TYPE_MEMBERSHIP
}
