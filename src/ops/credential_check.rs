use crate::application_impl::Argon2CredentialHasher;
use crate::application_port::CredentialHasher;
use crate::domain_port::CredentialRepo;
use crate::infra_pg::PgCredentialRepo;
use crate::settings;
use anyhow::Result;
use sqlx::PgPool;

/// The password-verification debug command: fetch the stored hash for an
/// email and check a candidate against it.
pub async fn check_credential(
    pool: &PgPool,
    hasher_config: &settings::Hasher,
    email: &str,
    password: &str,
) -> Result<()> {
    let repo = PgCredentialRepo::new(pool.clone());
    let hasher = Argon2CredentialHasher::new(hasher_config)?;

    let Some(record) = repo.get_by_email(email).await? else {
        println!("no user with email {email:?}");
        return Ok(());
    };

    let matched = hasher.verify_password(password, &record.password_hash).await?;

    println!("user:      {} (active: {})", record.user_id, record.is_active);
    println!("hash:      {}", phc_prefix(&record.password_hash));
    println!("candidate: {}", if matched { "MATCH" } else { "no match" });
    Ok(())
}

/// Companion to `check`: produce a stored-hash string for a password, for
/// pasting into a password-reset statement.
pub async fn hash_credential(hasher_config: &settings::Hasher, password: &str) -> Result<()> {
    let hasher = Argon2CredentialHasher::new(hasher_config)?;
    let stored = hasher.hash_password(password).await?;
    println!("{stored}");
    Ok(())
}

/// Algorithm tag and parameters only; salt and digest stay out of terminals
/// and scrollback.
fn phc_prefix(stored: &str) -> String {
    let fields: Vec<&str> = stored.split('$').collect();
    if fields.len() >= 4 {
        format!("${}${}${}$...", fields[1], fields[2], fields[3])
    } else {
        "(not a PHC string)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phc_prefix_hides_salt_and_digest() {
        let prefix = phc_prefix("$argon2id$v=19$m=32,t=1,p=1$c2FsdHNhbHQ$ZGlnZXN0");
        assert_eq!(prefix, "$argon2id$v=19$m=32,t=1,p=1$...");
    }

    #[test]
    fn phc_prefix_on_garbage() {
        assert_eq!(phc_prefix("bcrypt-or-junk"), "(not a PHC string)");
    }
}
