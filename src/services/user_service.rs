use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::user::User;

/// Read-only access to account records, keyed by mobile number. The
/// authentication service only ever talks to this trait, so tests can swap
/// the Postgres-backed implementation for a double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_mobile(&self, mobile_no: &str) -> Result<Option<User>>;
}

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserService {
    async fn find_by_mobile(&self, mobile_no: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, mobile_no, full_name, password_hash, is_active, created_at, updated_at
            FROM users
            WHERE mobile_no = $1
            "#,
        )
        .bind(mobile_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
