//! Password complexity checks
//!
//! Enforces the password-change policy. The checks run in a fixed priority
//! order and the first failing check decides the message.

use super::outcome::{Outcome, first_failure};

/// Minimum acceptable length for a new password.
const MINIMUM_PASSWORD_LENGTH: usize = 8;

/// Validates a proposed new password against the change policy.
///
/// Priority order: confirmation mismatch, reuse of the old password, length,
/// forbidden characters, then the missing-class checks (digit, special,
/// uppercase, lowercase).
pub fn password_complexity(new_password: &str, old_password: &str, confirm: &str) -> Outcome {
    if new_password != confirm {
        return Outcome::fail("Passwords do not match.");
    }
    if old_password == new_password {
        return Outcome::fail("New password must differ from old.");
    }
    if new_password.chars().count() < MINIMUM_PASSWORD_LENGTH {
        return Outcome::fail("Password must be at least 8 characters long.");
    }

    let mut has_digit = false;
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_special = false;

    for c in new_password.chars() {
        // Backslash and quotes are rejected outright; the character is not
        // classified any further.
        if c == '\\' || c == '"' || c == '\'' {
            return Outcome::fail("Password cannot contain backslash or quote characters.");
        }
        if c.is_ascii_digit() {
            has_digit = true;
        } else if c.is_uppercase() {
            has_upper = true;
        } else if c.is_lowercase() {
            has_lower = true;
        } else if !c.is_alphanumeric() {
            has_special = true;
        }
    }

    first_failure(&[
        (!has_digit, "Password must contain at least one digit."),
        (
            !has_special,
            "Password must contain at least one non-alphanumeric character.",
        ),
        (
            !has_upper,
            "Password must contain at least one uppercase letter.",
        ),
        (
            !has_lower,
            "Password must contain at least one lowercase letter.",
        ),
    ])
}
