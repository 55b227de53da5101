//! Salted password digests with constant-time verification.

use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;
use uuid::Uuid;

/// Number of salt bytes mixed into each digest.
pub const SALT_LENGTH: usize = 16;

/// One-way SHA-256 digest of a salted password.
///
/// The plaintext is never retained. Each call to [`PasswordDigest::derive`]
/// draws a fresh random salt, so equal passwords produce different digests.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    salt: [u8; SALT_LENGTH],
    digest: [u8; 32],
}

impl PasswordDigest {
    /// Derives a digest for `password` with a fresh random salt.
    #[must_use]
    pub fn derive(password: &str) -> Self {
        Self::with_salt(*Uuid::new_v4().as_bytes(), password)
    }

    /// Derives a digest for `password` with the given salt.
    #[must_use]
    pub fn with_salt(salt: [u8; SALT_LENGTH], password: &str) -> Self {
        let digest = Sha256::new()
            .chain_update(salt)
            .chain_update(password.as_bytes())
            .finalize()
            .into();
        Self { salt, digest }
    }

    /// Checks `candidate` against the stored digest in constant time.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let other = Self::with_salt(self.salt, candidate);
        self.digest.as_slice().ct_eq(other.digest.as_slice()).into()
    }

    /// Returns the salt used for this digest.
    #[must_use]
    pub const fn salt(&self) -> &[u8; SALT_LENGTH] {
        &self.salt
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}
