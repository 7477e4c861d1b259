//! Shared admin password.

use std::fmt;

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// The configured admin password, held only as a SHA-256 digest.
#[derive(Clone)]
pub struct AdminPassword {
    digest: [u8; 32],
}

impl AdminPassword {
    #[must_use]
    pub fn new(password: &str) -> Self {
        Self {
            digest: Sha256::digest(password.as_bytes()).into(),
        }
    }

    /// Whether `candidate` hashes to the configured digest.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();

        candidate.ct_eq(&self.digest).into()
    }
}

impl fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminPassword(**redacted**)")
    }
}

impl Drop for AdminPassword {
    fn drop(&mut self) {
        self.digest.zeroize();
    }
}
