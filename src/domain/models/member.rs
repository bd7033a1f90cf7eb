use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_ARCHIVED: &str = "archived";

pub const TYPE_NEW: &str = "new";
pub const TYPE_EXISTING: &str = "existing";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub age: Option<i32>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub registration_fee: i64,
    pub membership_fee: i64,
    pub member_type: String,
    pub registration_date: Option<NaiveDate>,
    pub last_paid_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub status: String,
    pub last_reminder_sent: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

pub struct NewMemberParams {
    pub name: String,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub age: Option<i32>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub registration_fee: i64,
    pub membership_fee: i64,
    pub member_type: String,
    pub registration_date: Option<NaiveDate>,
    pub last_paid_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
}

impl Member {
    pub fn new(params: NewMemberParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            phone: params.phone,
            dob: params.dob,
            age: params.age,
            id_type: params.id_type,
            id_number: params.id_number,
            registration_fee: params.registration_fee,
            membership_fee: params.membership_fee,
            member_type: params.member_type,
            registration_date: params.registration_date,
            last_paid_date: params.last_paid_date,
            next_due_date: params.next_due_date,
            status: STATUS_ACTIVE.to_string(),
            last_reminder_sent: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_archived(&self) -> bool {
        self.status == STATUS_ARCHIVED
    }
}
