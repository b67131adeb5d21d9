//! # Server configuration from environment variables
//!
//! [`ServerConfig`] is read once per process (see [`config`]) after `dotenvy` has
//! loaded any `.env` file. Only `DATABASE_URL` is required; everything else falls
//! back to a default when missing or unparsable.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DATABASE_URL` | none | PostgreSQL connection string |
//! | `ADMIN_USERNAME` | `admingo` | Dashboard username |
//! | `ADMIN_PASSWORD_HASH` | built-in password | Argon2 PHC string for the dashboard password |
//! | `SESSION_TTL_HOURS` | `12` | Admin session inactivity expiry |
//! | `DB_TIMEOUT_SECS` | `10` | Upper bound for a single database call |
//! | `EMAIL_TIMEOUT_SECS` | `15` | Upper bound for one email dispatch |
//! | `EMAIL_SIMULATED_DELAY_MS` | `1000` | Delay of the log-only mailer |
//! | `EMAIL_WEBHOOK_URL` | unset | POST `{to, subject, body}` here instead of logging |
//! | `SITE_CONTENT_SEED` | unset | TOML file used to seed site content on an empty table |

use std::str::FromStr;
use std::time::Duration;

use tokio::sync::OnceCell;

use crate::error::ApiError;

/// Username accepted when `ADMIN_USERNAME` is not set.
pub const DEFAULT_ADMIN_USERNAME: &str = "admingo";

static CONFIG: OnceCell<ServerConfig> = OnceCell::const_new();

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub admin_username: String,
    pub admin_password_hash: Option<String>,
    pub session_ttl: Duration,
    pub db_timeout: Duration,
    pub email_timeout: Duration,
    pub email_simulated_delay: Duration,
    pub email_webhook_url: Option<String>,
    pub site_content_seed: Option<String>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let database_url = non_empty(lookup("DATABASE_URL"))
            .ok_or_else(|| ApiError::Config("DATABASE_URL must be set".to_string()))?;

        Ok(Self {
            database_url,
            admin_username: non_empty(lookup("ADMIN_USERNAME"))
                .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password_hash: non_empty(lookup("ADMIN_PASSWORD_HASH")),
            session_ttl: Duration::from_secs(
                parse_or(lookup("SESSION_TTL_HOURS"), 12u64) * 60 * 60,
            ),
            db_timeout: Duration::from_secs(parse_or(lookup("DB_TIMEOUT_SECS"), 10)),
            email_timeout: Duration::from_secs(parse_or(lookup("EMAIL_TIMEOUT_SECS"), 15)),
            email_simulated_delay: Duration::from_millis(parse_or(
                lookup("EMAIL_SIMULATED_DELAY_MS"),
                1000,
            )),
            email_webhook_url: non_empty(lookup("EMAIL_WEBHOOK_URL")),
            site_content_seed: non_empty(lookup("SITE_CONTENT_SEED")),
        })
    }
}

/// Get the process-wide configuration, reading it on first use.
pub async fn config() -> Result<&'static ServerConfig, ApiError> {
    CONFIG
        .get_or_try_init(|| async { ServerConfig::from_env() })
        .await
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/gg")]))
                .unwrap();
        assert_eq!(config.admin_username, "admingo");
        assert!(config.admin_password_hash.is_none());
        assert_eq!(config.session_ttl, Duration::from_secs(12 * 3600));
        assert_eq!(config.db_timeout, Duration::from_secs(10));
        assert_eq!(config.email_timeout, Duration::from_secs(15));
        assert_eq!(config.email_simulated_delay, Duration::from_millis(1000));
        assert!(config.email_webhook_url.is_none());
    }

    #[test]
    fn test_overrides_and_malformed_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/gg"),
            ("ADMIN_USERNAME", "operator"),
            ("SESSION_TTL_HOURS", "2"),
            ("DB_TIMEOUT_SECS", "soon"),
            ("EMAIL_WEBHOOK_URL", "   "),
        ]))
        .unwrap();
        assert_eq!(config.admin_username, "operator");
        assert_eq!(config.session_ttl, Duration::from_secs(2 * 3600));
        assert_eq!(config.db_timeout, Duration::from_secs(10));
        assert!(config.email_webhook_url.is_none());
    }

    #[test]
    fn test_database_url_is_required() {
        let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
