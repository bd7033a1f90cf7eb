use crate::domain::{models::{member::Member, payment::Payment}, ports::MemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresMemberRepo {
    pool: PgPool,
}

impl PostgresMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PostgresMemberRepo {
    async fn create_with_payments(&self, member: &Member, payments: Vec<Payment>) -> Result<Member, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, name, phone, dob, age, id_type, id_number, registration_fee, membership_fee, member_type, registration_date, last_paid_date, next_due_date, status, last_reminder_sent, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
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
                "INSERT INTO payments (id, member_id, member_name, amount, paid_on, method, payment_type, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
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
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE phone = $1")
            .bind(phone).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list(&self, search: Option<&str>) -> Result<Vec<Member>, AppError> {
        match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Member>(
                    "SELECT * FROM members WHERE name ILIKE $1 OR phone LIKE $1 ORDER BY name ASC"
                )
                    .bind(&pattern)
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
            "UPDATE members SET name=$1, phone=$2, dob=$3, age=$4, id_type=$5, id_number=$6, registration_date=$7, next_due_date=$8
             WHERE id=$9
             RETURNING *"
        )
            .bind(&member.name).bind(&member.phone).bind(member.dob).bind(member.age)
            .bind(&member.id_type).bind(&member.id_number)
            .bind(member.registration_date).bind(member.next_due_date)
            .bind(&member.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }
        Ok(())
    }

    async fn set_status(&self, id: &str, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE members SET status = $1 WHERE id = $2")
            .bind(status).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn mark_reminder_sent(&self, id: &str, date: NaiveDate) -> Result<(), AppError> {
        sqlx::query("UPDATE members SET last_reminder_sent = $1 WHERE id = $2")
            .bind(date).bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
