//! Password digest
//!
//! One-way fingerprint used in place of stored plaintext passwords.

use sha1::{Digest, Sha1};

/// Returns the SHA-1 digest of the string's UTF-8 bytes as lowercase hex.
///
/// The digest implementation is linked statically, so unlike runtime
/// algorithm lookup there is no unavailable-algorithm failure mode and the
/// function is total.
pub fn sha1_hex(plaintext: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}
