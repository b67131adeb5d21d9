//! The single operator credential pair.

use tokio::sync::OnceCell;

use super::password::{hash_password, verify_password};
use crate::config::ServerConfig;
use crate::error::ApiError;

/// Password accepted when `ADMIN_PASSWORD_HASH` is not configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "9gogetters9";

static CREDENTIALS: OnceCell<AdminCredentials> = OnceCell::const_new();

/// Username plus Argon2 hash of the password.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Use the configured hash, or hash the built-in password.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ApiError> {
        let password_hash = match &config.admin_password_hash {
            Some(hash) => hash.clone(),
            None => {
                tracing::warn!("ADMIN_PASSWORD_HASH not set, using the built-in admin password");
                hash_password(DEFAULT_ADMIN_PASSWORD)?
            }
        };
        Ok(Self::new(config.admin_username.clone(), password_hash))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact, case-sensitive username match and a password that verifies.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, ApiError> {
        if username.is_empty() || password.is_empty() || username != self.username {
            return Ok(false);
        }
        verify_password(password, &self.password_hash)
    }
}

/// Process-wide credentials, built on first use.
pub async fn admin_credentials() -> Result<&'static AdminCredentials, ApiError> {
    CREDENTIALS
        .get_or_try_init(|| async {
            let config = crate::config::config().await?;
            AdminCredentials::from_config(config)
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(hash: Option<String>) -> ServerConfig {
        ServerConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/gg".to_string()),
            "ADMIN_PASSWORD_HASH" => hash.clone(),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_builtin_pair_is_accepted() {
        let credentials = AdminCredentials::from_config(&config(None)).unwrap();
        assert_eq!(credentials.username(), "admingo");
        assert!(credentials.verify("admingo", "9gogetters9").unwrap());
    }

    #[test]
    fn test_any_other_pair_is_rejected() {
        let credentials = AdminCredentials::from_config(&config(None)).unwrap();
        assert!(!credentials.verify("admingo", "wrong").unwrap());
        assert!(!credentials.verify("Admingo", "9gogetters9").unwrap());
        assert!(!credentials.verify("admingo", "9GOGETTERS9").unwrap());
        assert!(!credentials.verify("", "").unwrap());
        assert!(!credentials.verify("admingo", "").unwrap());
        assert!(!credentials.verify(" admingo", "9gogetters9").unwrap());
    }

    #[test]
    fn test_configured_hash_replaces_builtin_password() {
        let hash = hash_password("correct horse").unwrap();
        let credentials = AdminCredentials::from_config(&config(Some(hash))).unwrap();
        assert!(credentials.verify("admingo", "correct horse").unwrap());
        assert!(!credentials.verify("admingo", DEFAULT_ADMIN_PASSWORD).unwrap());
    }
}
