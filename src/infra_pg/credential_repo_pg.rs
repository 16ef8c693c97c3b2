use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

pub struct PgCredentialRepo {
    pool: PgPool,
}

impl PgCredentialRepo {
    pub fn new(pool: PgPool) -> Self {
        PgCredentialRepo { pool }
    }

    fn row_to_record(row: PgRow) -> Result<CredentialRecord, CredentialError> {
        let user_id: UserId = row
            .try_get("user_id")
            .map_err(|e| CredentialError::Store(e.to_string()))?;
        let email: String = row
            .try_get("email")
            .map_err(|e| CredentialError::Store(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| CredentialError::Store(e.to_string()))?;
        let is_active: bool = row
            .try_get("is_active")
            .map_err(|e| CredentialError::Store(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| CredentialError::Store(e.to_string()))?;

        Ok(CredentialRecord {
            user_id,
            email,
            password_hash,
            is_active,
            created_at,
        })
    }
}

#[async_trait::async_trait]
impl CredentialRepo for PgCredentialRepo {
    async fn get_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, CredentialError> {
        let row_opt: Option<PgRow> = sqlx::query(
            r#"
SELECT user_id, email, password_hash, is_active, created_at
FROM users
WHERE email = $1
"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialError::Store(e.to_string()))?;

        row_opt.map(Self::row_to_record).transpose()
    }
}
