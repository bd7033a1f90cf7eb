use crate::domain::{models::user::User, ports::UserRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepo {
    async fn create(&self, user: &User) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, phone, pin, created_at) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.phone)
            .bind(&user.pin)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_phone_and_pin(&self, phone: &str, pin: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE phone = $1 AND pin = $2")
            .bind(phone)
            .bind(pin)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
