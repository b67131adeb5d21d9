//! # Email dispatch
//!
//! The dispatch contract is `{to, subject, body}` in, success or failure out
//! ([`store::OutgoingEmail`]). No delivery provider is wired in:
//!
//! - [`LogMailer`] (default) logs the email and reports success after a fixed
//!   delay, standing in for a provider.
//! - [`WebhookMailer`] (when `EMAIL_WEBHOOK_URL` is set) POSTs the same JSON
//!   to that URL and treats any non-2xx status as a failure.
//!
//! [`dispatch`] validates the email and bounds the call with a timeout.

use std::future::Future;
use std::time::Duration;

use store::OutgoingEmail;
use tokio::sync::OnceCell;

use crate::config::ServerConfig;
use crate::error::{with_timeout, ApiError};

static MAILER: OnceCell<ConfiguredMailer> = OnceCell::const_new();

/// Something that can deliver an [`OutgoingEmail`].
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Logs the email instead of sending it.
#[derive(Debug, Clone)]
pub struct LogMailer {
    delay: Duration,
}

impl LogMailer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), ApiError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            "Email would be sent"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// Hands the email to an HTTP endpoint as JSON.
#[derive(Debug, Clone)]
pub struct WebhookMailer {
    client: reqwest::Client,
    url: String,
}

impl WebhookMailer {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl Mailer for WebhookMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), ApiError> {
        self.client
            .post(&self.url)
            .json(email)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ApiError::Mail(e.to_string()))?;
        Ok(())
    }
}

/// The mailer selected by [`ServerConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredMailer {
    Log(LogMailer),
    Webhook(WebhookMailer),
}

impl ConfiguredMailer {
    pub fn from_config(config: &ServerConfig) -> Self {
        match &config.email_webhook_url {
            Some(url) => ConfiguredMailer::Webhook(WebhookMailer::new(url.clone())),
            None => ConfiguredMailer::Log(LogMailer::new(config.email_simulated_delay)),
        }
    }
}

impl Mailer for ConfiguredMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), ApiError> {
        match self {
            ConfiguredMailer::Log(mailer) => mailer.send(email).await,
            ConfiguredMailer::Webhook(mailer) => mailer.send(email).await,
        }
    }
}

/// Process-wide mailer, built from the configuration on first use.
pub async fn mailer() -> Result<&'static ConfiguredMailer, ApiError> {
    MAILER
        .get_or_try_init(|| async {
            let config = crate::config::config().await?;
            Ok(ConfiguredMailer::from_config(config))
        })
        .await
}

/// Validate `email` and send it, giving up after `limit`.
pub async fn dispatch<M: Mailer>(
    mailer: &M,
    email: &OutgoingEmail,
    limit: Duration,
) -> Result<(), ApiError> {
    if email.to.trim().is_empty() || !email.to.contains('@') {
        return Err(store::ValidationError::InvalidEmail.into());
    }
    if email.body.trim().is_empty() {
        return Err(store::ValidationError::MissingField("Reply").into());
    }
    with_timeout("email dispatch", limit, mailer.send(email)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            to: "jane@x.com".to_string(),
            subject: store::REPLY_SUBJECT.to_string(),
            body: "Your application is approved.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_log_mailer_reports_success() {
        let mailer = LogMailer::new(Duration::ZERO);
        assert!(dispatch(&mailer, &email(), Duration::from_secs(1)).await.is_ok());
    }

    #[tokio::test]
    async fn test_slow_mailer_times_out() {
        let mailer = LogMailer::new(Duration::from_millis(500));
        let err = dispatch(&mailer, &email(), Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Timeout(_, _)));
    }

    #[tokio::test]
    async fn test_blank_reply_is_rejected() {
        let mailer = LogMailer::new(Duration::ZERO);

        let mut blank = email();
        blank.body = "   ".to_string();
        assert!(matches!(
            dispatch(&mailer, &blank, Duration::from_secs(1)).await,
            Err(ApiError::Validation(_))
        ));

        let mut no_recipient = email();
        no_recipient.to = String::new();
        assert!(matches!(
            dispatch(&mailer, &no_recipient, Duration::from_secs(1)).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_webhook_selected_when_configured() {
        let config = ServerConfig::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://localhost/gg".to_string()),
            "EMAIL_WEBHOOK_URL" => Some("http://localhost:9000/mail".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(matches!(
            ConfiguredMailer::from_config(&config),
            ConfiguredMailer::Webhook(_)
        ));
    }
}
