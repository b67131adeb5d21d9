//! Admin session flag.

use tower_sessions::Session;

use crate::error::ApiError;

/// Key of the boolean set in the session after a successful login.
pub const SESSION_ADMIN_KEY: &str = "admin_logged_in";

/// Whether the session carries the admin flag.
pub async fn is_admin(session: &Session) -> Result<bool, ApiError> {
    let flag: Option<bool> = session.get(SESSION_ADMIN_KEY).await?;
    Ok(flag.unwrap_or(false))
}

/// Fail with [`ApiError::Unauthorized`] unless the admin flag is set.
pub async fn require_admin(session: &Session) -> Result<(), ApiError> {
    if is_admin(session).await? {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_flag_gates_access() {
        let session = session();
        assert!(!is_admin(&session).await.unwrap());
        assert!(matches!(
            require_admin(&session).await,
            Err(ApiError::Unauthorized)
        ));

        session.insert(SESSION_ADMIN_KEY, true).await.unwrap();
        assert!(is_admin(&session).await.unwrap());
        assert!(require_admin(&session).await.is_ok());

        session.flush().await.unwrap();
        assert!(!is_admin(&session).await.unwrap());
    }
}
