use crate::application_port::*;
use crate::domain_model::*;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct CredentialRecord {
    pub user_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[async_trait::async_trait]
pub trait CredentialRepo: Send + Sync {
    /// Fetch the stored credential row for an email, if one exists.
    async fn get_by_email(&self, email: &str) -> Result<Option<CredentialRecord>, CredentialError>;
}
