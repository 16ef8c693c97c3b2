use crate::application_port::*;
use crate::settings;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{Error as PhcError, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use tracing::warn;

/// Argon2id hasher producing PHC-format stored strings
/// (`$argon2id$v=19$m=..,t=..,p=..$salt$digest`).
///
/// Costs from the settings file apply to new hashes only; verification runs
/// with the parameters embedded in each stored string, so old hashes keep
/// verifying after a cost bump. Digest comparison inside the `argon2` crate
/// is constant-time.
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    pub fn new(config: &settings::Hasher) -> Result<Self, CredentialError> {
        let params = Params::new(config.m_cost_kib, config.t_cost, config.p_cost, None)
            .map_err(|e| CredentialError::InternalError(format!("argon2 params: {e}")))?;
        Ok(Argon2CredentialHasher {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    async fn hash_password(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CredentialError::InternalError(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    async fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, CredentialError> {
        let parsed = match PasswordHash::new(password_hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("stored password hash is not a valid PHC string: {e}");
                return Ok(false);
            }
        };

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(_) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(e) => Err(CredentialError::InternalError(format!(
                "verify error: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal costs so the suite stays fast; production costs come from the
    // settings file.
    fn cheap_hasher() -> Argon2CredentialHasher {
        Argon2CredentialHasher::new(&settings::Hasher {
            m_cost_kib: 32,
            t_cost: 1,
            p_cost: 1,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn hash_then_verify_matches() {
        let hasher = cheap_hasher();
        let stored = hasher.hash_password("correct-horse").await.unwrap();
        assert!(hasher.verify_password("correct-horse", &stored).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let hasher = cheap_hasher();
        let stored = hasher.hash_password("correct-horse").await.unwrap();
        assert!(!hasher.verify_password("wrong-horse", &stored).await.unwrap());
    }

    #[tokio::test]
    async fn empty_password_is_an_ordinary_candidate() {
        let hasher = cheap_hasher();
        let stored = hasher.hash_password("correct-horse").await.unwrap();
        assert!(!hasher.verify_password("", &stored).await.unwrap());

        let stored_empty = hasher.hash_password("").await.unwrap();
        assert!(hasher.verify_password("", &stored_empty).await.unwrap());
        assert!(!hasher.verify_password("x", &stored_empty).await.unwrap());
    }

    #[tokio::test]
    async fn fresh_salt_per_hash() {
        let hasher = cheap_hasher();
        let first = hasher.hash_password("same-password").await.unwrap();
        let second = hasher.hash_password("same-password").await.unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify_password("same-password", &first).await.unwrap());
        assert!(hasher.verify_password("same-password", &second).await.unwrap());
    }

    #[tokio::test]
    async fn stored_string_is_self_describing() {
        let hasher = cheap_hasher();
        let stored = hasher.hash_password("correct-horse").await.unwrap();
        assert!(stored.starts_with("$argon2id$"));
        assert!(stored.contains("m=32,t=1,p=1"));
    }

    #[tokio::test]
    async fn old_hashes_verify_after_cost_change() {
        let old = cheap_hasher();
        let stored = old.hash_password("correct-horse").await.unwrap();

        let bumped = Argon2CredentialHasher::new(&settings::Hasher {
            m_cost_kib: 64,
            t_cost: 2,
            p_cost: 1,
        })
        .unwrap();
        assert!(bumped.verify_password("correct-horse", &stored).await.unwrap());
        assert!(!bumped.verify_password("wrong-horse", &stored).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_no_match_not_an_error() {
        let hasher = cheap_hasher();
        let stored = hasher.hash_password("correct-horse").await.unwrap();
        let truncated = &stored[..stored.len() / 2];

        for garbage in ["", "not-a-phc-string", "$argon2id$", truncated] {
            assert!(!hasher.verify_password("correct-horse", garbage).await.unwrap());
        }
    }

    #[tokio::test]
    async fn unicode_and_long_passwords_round_trip() {
        let hasher = cheap_hasher();
        let long = "a".repeat(1024);
        for password in ["pässwörd-日本語", long.as_str()] {
            let stored = hasher.hash_password(password).await.unwrap();
            assert!(hasher.verify_password(password, &stored).await.unwrap());
        }
    }
}
