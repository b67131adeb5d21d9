//! # API crate: shared fullstack server functions for the Goal Getters website
//!
//! Defines every Dioxus server function the `web` frontend calls, along with the
//! server-side modules behind them.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | none | Operator credential check (Argon2) and the admin session flag |
//! | [`config`] | `server` | `ServerConfig` read from the environment |
//! | [`db`] | none | PostgreSQL pool, `submissions` and `site_content` tables |
//! | [`error`] | `server` | `ApiError` and its mapping to client-safe messages |
//! | [`mail`] | `server` | Email dispatch (`LogMailer`, `WebhookMailer`) |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated with
//! `#[get(...)]` or `#[post(...)]` and compiled twice: once with full server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Public**: `submit_contact`, `get_site_content`
//! - **Admin session**: `admin_login`, `admin_logout`, `admin_status`
//! - **Admin only**: `list_messages`, `send_email`, `save_site_content`

use dioxus::prelude::*;

pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod db;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod mail;

pub use store::{ContactForm, ContactSubmission, OutgoingEmail, SiteContent};

#[cfg(feature = "server")]
use crate::error::{server_error, with_timeout};

/// Store a contact form, overwriting the earlier message from the same email.
#[cfg(feature = "server")]
#[post("/api/contact")]
pub async fn submit_contact(form: ContactForm) -> Result<(), ServerFnError> {
    use store::{Stamp, SubmissionStore, UpsertOutcome};

    let form = form.validated().map_err(server_error)?;
    let config = config::config().await.map_err(server_error)?;
    let pool = db::get_pool().await.map_err(server_error)?;
    let submissions = db::PgSubmissionStore::new(pool.clone());

    let outcome = with_timeout(
        "submit_contact",
        config.db_timeout,
        submissions.upsert(&form, Stamp::now()),
    )
    .await
    .map_err(server_error)?;

    match outcome {
        UpsertOutcome::Created(id) => tracing::info!(id, "New contact submission"),
        UpsertOutcome::Updated(id) => tracing::info!(id, "Contact submission updated"),
    }
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/contact")]
pub async fn submit_contact(form: ContactForm) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Current site copy, or the published defaults when nothing has been saved.
#[cfg(feature = "server")]
#[get("/api/content")]
pub async fn get_site_content() -> Result<SiteContent, ServerFnError> {
    let config = config::config().await.map_err(server_error)?;
    let pool = db::get_pool().await.map_err(server_error)?;
    let content = db::PgContentStore::new(pool.clone());

    let stored = with_timeout("get_site_content", config.db_timeout, content.load())
        .await
        .map_err(server_error)?;
    Ok(stored.unwrap_or_default())
}

#[cfg(not(feature = "server"))]
#[get("/api/content")]
pub async fn get_site_content() -> Result<SiteContent, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Check the operator credentials and mark the session as signed in.
#[cfg(feature = "server")]
#[post("/api/admin/login", session: tower_sessions::Session)]
pub async fn admin_login(username: String, password: String) -> Result<(), ServerFnError> {
    let credentials = auth::admin_credentials().await.map_err(server_error)?;

    if !credentials
        .verify(&username, &password)
        .map_err(server_error)?
    {
        tracing::warn!(username = %username, "Failed admin login");
        return Err(server_error(error::ApiError::InvalidCredentials));
    }

    session.cycle_id().await.map_err(server_error)?;
    session
        .insert(auth::SESSION_ADMIN_KEY, true)
        .await
        .map_err(server_error)?;

    tracing::info!(username = %username, "Admin signed in");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/login")]
pub async fn admin_login(username: String, password: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign the operator out by clearing the session.
#[cfg(feature = "server")]
#[post("/api/admin/logout", session: tower_sessions::Session)]
pub async fn admin_logout() -> Result<(), ServerFnError> {
    session.flush().await.map_err(server_error)?;
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/logout")]
pub async fn admin_logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Whether the current session is signed in as the operator.
#[cfg(feature = "server")]
#[get("/api/admin/status", session: tower_sessions::Session)]
pub async fn admin_status() -> Result<bool, ServerFnError> {
    auth::is_admin(&session).await.map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/status")]
pub async fn admin_status() -> Result<bool, ServerFnError> {
    Ok(false)
}

/// All contact submissions, most recent first.
#[cfg(feature = "server")]
#[get("/api/admin/messages", session: tower_sessions::Session)]
pub async fn list_messages() -> Result<Vec<ContactSubmission>, ServerFnError> {
    use store::SubmissionStore;

    auth::require_admin(&session).await.map_err(server_error)?;

    let config = config::config().await.map_err(server_error)?;
    let pool = db::get_pool().await.map_err(server_error)?;
    let submissions = db::PgSubmissionStore::new(pool.clone());

    with_timeout("list_messages", config.db_timeout, submissions.list_recent())
        .await
        .map_err(server_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/admin/messages")]
pub async fn list_messages() -> Result<Vec<ContactSubmission>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Hand an email to the configured mailer.
#[cfg(feature = "server")]
#[post("/api/send-email", session: tower_sessions::Session)]
pub async fn send_email(to: String, subject: String, body: String) -> Result<(), ServerFnError> {
    auth::require_admin(&session).await.map_err(server_error)?;

    let config = config::config().await.map_err(server_error)?;
    let mailer = mail::mailer().await.map_err(server_error)?;
    let email = OutgoingEmail { to, subject, body };

    mail::dispatch(mailer, &email, config.email_timeout)
        .await
        .map_err(server_error)?;

    tracing::info!(to = %email.to, "Email dispatched");
    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/send-email")]
pub async fn send_email(to: String, subject: String, body: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Validate and store the edited site copy, returning what was stored.
#[cfg(feature = "server")]
#[post("/api/admin/content", session: tower_sessions::Session)]
pub async fn save_site_content(content: SiteContent) -> Result<SiteContent, ServerFnError> {
    auth::require_admin(&session).await.map_err(server_error)?;
    content.validate().map_err(server_error)?;

    let config = config::config().await.map_err(server_error)?;
    let pool = db::get_pool().await.map_err(server_error)?;
    let store = db::PgContentStore::new(pool.clone());

    with_timeout("save_site_content", config.db_timeout, store.save(&content))
        .await
        .map_err(server_error)?;

    tracing::info!("Website content saved");
    Ok(content)
}

#[cfg(not(feature = "server"))]
#[post("/api/admin/content")]
pub async fn save_site_content(content: SiteContent) -> Result<SiteContent, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
