//! # Database module: PostgreSQL pool and table access
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so client (WASM) builds never
//! pull in SQLx or Tokio networking code.
//!
//! - [`get_pool`]: lazy, process-wide `PgPool` singleton (`tokio::sync::OnceCell`),
//!   opened from `DATABASE_URL` with up to 5 connections.
//! - [`PgSubmissionStore`]: the `submissions` table behind [`store::SubmissionStore`],
//!   using a native `ON CONFLICT (email)` upsert.
//! - [`PgContentStore`]: the `site_content` table holding the TOML site copy.

#[cfg(feature = "server")]
mod content;
#[cfg(feature = "server")]
mod pool;
#[cfg(feature = "server")]
mod submissions;

#[cfg(feature = "server")]
pub use content::PgContentStore;
#[cfg(feature = "server")]
pub use pool::get_pool;
#[cfg(feature = "server")]
pub use submissions::{PgSubmissionStore, EMAIL_CONSTRAINT};
