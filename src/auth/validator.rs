//! Credential validator
//!
//! Decides login and password-change outcomes from a stored credential
//! lookup result and the entered fields.

use super::credentials::{CredentialRecord, StoredPassword};
use super::digest::sha1_hex;
use crate::validation::{Outcome, password_complexity};

/// Message attached to the successful-but-must-reset login outcome.
///
/// Callers branch on this message: the outcome is `ok`, but the session must
/// move to the password-reset flow instead of granting normal access.
pub const DEFAULT_PASSWORD_PROMPT: &str = "Default password, please change.";

/// Validates entered credentials against the stored record.
///
/// A missing record fails with "Username not found." — lookups that errored
/// out are degraded to the same outcome by the caller. The entered username
/// is not consulted beyond having selected the record.
pub fn check_current_details(
    stored: Option<&CredentialRecord>,
    _entered_name: &str,
    entered_pass: &str,
) -> Outcome {
    let Some(record) = stored else {
        return Outcome::fail("Username not found.");
    };

    match &record.password {
        StoredPassword::DefaultPending => Outcome::pass_with(DEFAULT_PASSWORD_PROMPT),
        StoredPassword::Hashed(digest) => {
            if sha1_hex(entered_pass) != *digest {
                Outcome::fail("Incorrect password.")
            } else {
                Outcome::pass()
            }
        }
    }
}

/// Validates a proposed replacement password.
pub fn check_new_details(old_password: &str, new_password: &str, confirm: &str) -> Outcome {
    password_complexity(new_password, old_password, confirm)
}
