#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("user not found")]
    UserNotFound,
    #[error("store error: {0}")]
    Store(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

/// Produces and checks stored password hashes.
///
/// `verify_password` never distinguishes "stored hash is garbage" from
/// "wrong password" in its result; both are a plain `false`. A malformed
/// stored hash is a data-integrity problem on our side and is only logged.
#[async_trait::async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, CredentialError>;
    async fn verify_password(&self, password: &str, password_hash: &str)
    -> Result<bool, CredentialError>;
}
