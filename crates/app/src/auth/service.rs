//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use subtle::ConstantTimeEq;
use tracing::{debug, info};

use crate::{
    auth::{
        AdminPassword, AdminSession, AuthServiceError, IssuedSession, SessionUuid,
        format_session_token, generate_session_secret, hash_session_token,
        models::NewSession, parse_session_token, repository::PgAuthRepository,
    },
    database::Db,
};

/// Lifetime of an admin session and of its cookie.
pub const SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgAuthRepository,
    password: Arc<AdminPassword>,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, password: AdminPassword) -> Self {
        Self {
            db,
            repository: PgAuthRepository::new(),
            password: Arc::new(password),
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn login(&self, password: &str) -> Result<IssuedSession, AuthServiceError> {
        if !self.password.verify(password) {
            info!("rejected dashboard login");

            return Err(AuthServiceError::InvalidPassword);
        }

        let uuid = SessionUuid::new();
        let token = format_session_token(uuid, &generate_session_secret());

        let mut tx = self.db.begin_transaction().await?;

        let session = self
            .repository
            .create_session(
                &mut tx,
                &NewSession {
                    uuid,
                    token_hash: hash_session_token(&token),
                    ttl_seconds: SESSION_TTL_SECONDS,
                },
            )
            .await?;

        tx.commit().await?;

        info!(session = %session.uuid, "issued dashboard session");

        Ok(IssuedSession { token, session })
    }

    async fn authenticate_session(&self, token: &str) -> Result<AdminSession, AuthServiceError> {
        let parsed = parse_session_token(token).map_err(|_| AuthServiceError::NotFound)?;

        let mut tx = self.db.begin_transaction().await?;

        let active = self
            .repository
            .find_active_session(&mut tx, parsed.session_uuid)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let expected = hash_session_token(token);

        if !bool::from(active.token_hash.as_bytes().ct_eq(expected.as_bytes())) {
            debug!(session = %parsed.session_uuid, "session token hash mismatch");

            return Err(AuthServiceError::NotFound);
        }

        self.repository
            .touch_session(&mut tx, parsed.session_uuid)
            .await?;

        tx.commit().await?;

        Ok(active.session)
    }

    async fn logout(&self, token: &str) -> Result<(), AuthServiceError> {
        let parsed = parse_session_token(token)?;

        let mut tx = self.db.begin_transaction().await?;

        let revoked = self
            .repository
            .revoke_session(&mut tx, parsed.session_uuid, &hash_session_token(token))
            .await?;

        tx.commit().await?;

        if !revoked {
            return Err(AuthServiceError::NotFound);
        }

        info!(session = %parsed.session_uuid, "revoked dashboard session");

        Ok(())
    }

    async fn purge_sessions(&self) -> Result<u64, AuthServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let purged = self.repository.purge_sessions(&mut tx).await?;

        tx.commit().await?;

        Ok(purged)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Checks the shared admin password and opens a new session.
    async fn login(&self, password: &str) -> Result<IssuedSession, AuthServiceError>;

    /// Resolves a session cookie to its live session.
    async fn authenticate_session(&self, token: &str) -> Result<AdminSession, AuthServiceError>;

    /// Revokes the session behind `token`.
    async fn logout(&self, token: &str) -> Result<(), AuthServiceError>;

    /// Deletes expired and revoked sessions, returning how many were removed.
    async fn purge_sessions(&self) -> Result<u64, AuthServiceError>;
}
