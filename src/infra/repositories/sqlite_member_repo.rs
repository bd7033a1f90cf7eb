use crate::domain::{models::{member::Member, payment::Payment}, ports::MemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteMemberRepo {
    pool: SqlitePool,
}

impl SqliteMemberRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepo {
    async fn create_with_payments(&self, member: &Member, payments: Vec<Payment>) -> Result<Member, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, name, phone, dob, age, id_type, id_number, registration_fee, membership_fee, member_type, registration_date, last_paid_date, next_due_date, status, last_reminder_sent, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&member.id).bind(&member.name).bind(&member.phone).bind(member.dob)
            .bind(member.age).bind(&member.id_type).bind(&member.id_number)
            .bind(member.registration_fee).bind(member.membership_fee).bind(&member.member_type)
            .bind(member.registration_date).bind(member.last_paid_date).bind(member.next_due_date)
            .bind(&member.status).bind(member.last_reminder_sent).bind(member.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        for payment in payments {
            sqlx::query(
                "INSERT INTO payments (id, member_id, member_name, amount, paid_on, method, payment_type, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
            )
                .bind(&payment.id).bind(&payment.member_id).bind(&payment.member_name)
                .bind(payment.amount).bind(payment.paid_on).bind(&payment.method)
                .bind(&payment.payment_type).bind(payment.created_at)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE phone = ?")
            .bind(phone).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Member>, AppError> {
        match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Member>(
                    "SELECT * FROM members WHERE name LIKE ? OR phone LIKE ? ORDER BY name ASC"
                )
                    .bind(&pattern).bind(&pattern)
                    .fetch_all(&self.pool).await.map_err(AppError::Database)
            }
            None => {
                sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY name ASC")
                    .fetch_all(&self.pool).await.map_err(AppError::Database)
            }
        }
    }

    async fn update(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET name=?, phone=?, dob=?, age=?, id_type=?, id_number=?, registration_date=?, next_due_date=?
             WHERE id=?
             RETURNING *"
        )
            .bind(&member.name).bind(&member.phone).bind(member.dob).bind(member.age)
            .bind(&member.id_type).bind(&member.id_number)
            .bind(member.registration_date).bind(member.next_due_date)
            .bind(&member.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }
        Ok(())
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE members SET status = ? WHERE id = ?")
            .bind(status).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn mark_reminder_sent(&self, id: &str, date: NaiveDate) -> Result<(), AppError> {
        sqlx::query("UPDATE members SET last_reminder_sent = ? WHERE id = ?")
            .bind(date).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
