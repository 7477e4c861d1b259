//! Session token formatting, parsing and hashing.
//!
//! Format: `ss_{session_uuid_simple}{secret_hex}`.

use std::fmt;

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::auth::SessionUuid;

/// Session token prefix, including its separator.
pub const SESSION_TOKEN_PREFIX: &str = "ss_";

/// Number of secret bytes encoded in a token.
pub const SESSION_SECRET_BYTES: usize = 32;

const SESSION_SECRET_HEX_CHARS: usize = SESSION_SECRET_BYTES * 2;

const UUID_SIMPLE_CHARS: usize = 32;

#[derive(Clone)]
pub struct SessionSecret {
    bytes: [u8; SESSION_SECRET_BYTES],
}

impl SessionSecret {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SESSION_SECRET_BYTES]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SESSION_SECRET_BYTES] {
        &self.bytes
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(**redacted**)")
    }
}

impl Drop for SessionSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Clone)]
pub struct ParsedSessionToken {
    pub session_uuid: SessionUuid,
    pub secret: SessionSecret,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionTokenError {
    #[error("session token format is invalid")]
    InvalidFormat,

    #[error("session token secret encoding is invalid")]
    InvalidSecretEncoding,
}

#[must_use]
pub fn generate_session_secret() -> SessionSecret {
    let mut secret = [0_u8; SESSION_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    SessionSecret::from_bytes(secret)
}

#[must_use]
pub fn format_session_token(session_uuid: SessionUuid, secret: &SessionSecret) -> String {
    format!(
        "{SESSION_TOKEN_PREFIX}{}{}",
        session_uuid.into_uuid().simple(),
        encode_hex(secret.as_bytes())
    )
}

/// Split a token into its session id and secret.
///
/// # Errors
///
/// - [`SessionTokenError::InvalidFormat`]: wrong prefix, length or session id.
/// - [`SessionTokenError::InvalidSecretEncoding`]: the secret is not hex.
pub fn parse_session_token(token: &str) -> Result<ParsedSessionToken, SessionTokenError> {
    let body = token
        .strip_prefix(SESSION_TOKEN_PREFIX)
        .ok_or(SessionTokenError::InvalidFormat)?;

    if body.len() != UUID_SIMPLE_CHARS + SESSION_SECRET_HEX_CHARS || !body.is_ascii() {
        return Err(SessionTokenError::InvalidFormat);
    }

    let (uuid_segment, secret_hex) = body.split_at(UUID_SIMPLE_CHARS);

    let session_uuid = Uuid::try_parse(uuid_segment)
        .map(SessionUuid::from_uuid)
        .map_err(|_| SessionTokenError::InvalidFormat)?;

    let secret = decode_secret_hex(secret_hex).ok_or(SessionTokenError::InvalidSecretEncoding)?;

    Ok(ParsedSessionToken {
        session_uuid,
        secret: SessionSecret::from_bytes(secret),
    })
}

/// Hex SHA-256 of the full token string, as stored in `admin_sessions.token_hash`.
#[must_use]
pub fn hash_session_token(token: &str) -> String {
    encode_hex(&Sha256::digest(token.as_bytes()))
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }

    encoded
}

fn decode_secret_hex(secret_hex: &str) -> Option<[u8; SESSION_SECRET_BYTES]> {
    if secret_hex.len() != SESSION_SECRET_HEX_CHARS {
        return None;
    }

    let mut secret = [0_u8; SESSION_SECRET_BYTES];

    for (byte, pair) in secret.iter_mut().zip(secret_hex.as_bytes().chunks_exact(2)) {
        let [hi, lo] = pair else {
            return None;
        };

        *byte = (decode_hex_nibble(*hi)? << 4) | decode_hex_nibble(*lo)?;
    }

    Some(secret)
}

fn decode_hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn format_then_parse_recovers_parts() -> TestResult {
        let session_uuid = SessionUuid::from_uuid(Uuid::nil());
        let secret = SessionSecret::from_bytes([0xAB; SESSION_SECRET_BYTES]);
        let token = format_session_token(session_uuid, &secret);

        assert!(token.starts_with("ss_00000000000000000000000000000000abab"), "token layout");

        let parsed = parse_session_token(&token)?;

        assert_eq!(parsed.session_uuid, session_uuid, "session uuid mismatch");
        assert_eq!(parsed.secret.as_bytes(), secret.as_bytes(), "secret mismatch");

        Ok(())
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        let valid = format_session_token(SessionUuid::new(), &generate_session_secret());

        let wrong_prefix = valid.replacen("ss_", "lt_", 1);
        let truncated = &valid[..valid.len() - 1];
        let extended = format!("{valid}0");

        for token in ["", "ss_", wrong_prefix.as_str(), truncated, extended.as_str()] {
            assert_eq!(
                parse_session_token(token).err(),
                Some(SessionTokenError::InvalidFormat),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_non_hex_secret() {
        let token = format!("ss_{}{}", Uuid::nil().simple(), "zz".repeat(SESSION_SECRET_BYTES));

        assert_eq!(
            parse_session_token(&token).err(),
            Some(SessionTokenError::InvalidSecretEncoding),
            "non-hex secret should be rejected"
        );
    }

    #[test]
    fn hash_is_hex_sha256() {
        assert_eq!(
            hash_session_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            "digest mismatch"
        );
    }

    #[test]
    fn secret_debug_is_redacted() {
        let secret = generate_session_secret();

        assert_eq!(format!("{secret:?}"), "SessionSecret(**redacted**)", "debug output");
    }
}
