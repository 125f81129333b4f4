//! One-way masking of field values.
//!
//! Values are replaced by the lowercase hex SHA-256 digest of their UTF-8
//! bytes. No salt is applied: equal inputs give equal digests in every run
//! and every file, so masked columns can still be joined or counted. That
//! also means a digest of a guessable value (a common first name, say) can
//! be reversed by hashing candidates.

use sha2::{Digest, Sha256};

/// Length of every masked value.
pub const DIGEST_HEX_LEN: usize = 64;

pub fn anonymize(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}
