//! Admin authentication: one operator account, verified server-side.

#[cfg(feature = "server")]
mod credentials;
#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use credentials::{admin_credentials, AdminCredentials, DEFAULT_ADMIN_PASSWORD};
#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::{is_admin, require_admin, SESSION_ADMIN_KEY};
