use crate::domain::{models::{member::Member, payment::Payment}, ports::PaymentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePaymentRepo {
    pool: SqlitePool,
}

impl SqlitePaymentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for SqlitePaymentRepo {
    async fn record_for_member(&self, payment: &Payment, member: &Member) -> Result<Payment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (id, member_id, member_name, amount, paid_on, method, payment_type, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&payment.id).bind(&payment.member_id).bind(&payment.member_name)
            .bind(payment.amount).bind(payment.paid_on).bind(&payment.method)
            .bind(&payment.payment_type).bind(payment.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        let result = sqlx::query(
            "UPDATE members SET last_paid_date = ?, next_due_date = ?, status = ? WHERE id = ?"
        )
            .bind(member.last_paid_date).bind(member.next_due_date).bind(&member.status)
            .bind(&member.id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE member_id = ? ORDER BY paid_on DESC, created_at DESC"
        )
            .bind(member_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments ORDER BY paid_on DESC, created_at DESC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
