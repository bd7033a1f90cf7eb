use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Gym-owner login record. The PIN is stored and compared as plain text,
/// matching the product's single-owner usage; hardening is out of scope.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub pin: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, phone: String, pin: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            pin,
            created_at: Utc::now(),
        }
    }
}
