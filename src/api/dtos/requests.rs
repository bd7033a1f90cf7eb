use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub pin: String,
}

/// Registration form. Required fields arrive as Options so validation can
/// answer with the field name instead of a deserialization error.
#[derive(Deserialize)]
pub struct RegisterMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub registration_fee: Option<i64>,
    pub membership_fee: Option<i64>,
    pub registration_method: Option<String>,
    pub membership_method: Option<String>,
    pub member_type: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
}

/// Full edit form: submitted fields replace the stored ones wholesale,
/// absent optionals clear them. This is the sanctioned override path for
/// the due date.
#[derive(Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<NaiveDate>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct RecordPaymentRequest {
    pub method: Option<String>,
    pub amount: Option<i64>,
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
}

#[derive(Deserialize)]
pub struct MembersQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct ReportQuery {
    pub month: u32,
    pub year: i32,
}
