//! Auth data models.

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Admin session UUID
pub type SessionUuid = TypedUuid<AdminSession>;

/// Session metadata persisted in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub uuid: SessionUuid,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// Session data used while authenticating a cookie.
#[derive(Debug, Clone)]
pub(crate) struct ActiveSession {
    pub session: AdminSession,

    /// Hex SHA-256 of the full session token.
    pub token_hash: String,
}

/// New session persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewSession {
    pub uuid: SessionUuid,
    pub token_hash: String,
    pub ttl_seconds: i64,
}

/// Session issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub session: AdminSession,
}
