//! Field presence checks
//!
//! Rejects blank login and password-change form fields before any store
//! lookup happens. Only the emptiness test trims whitespace; the raw field
//! values are what flow into the rest of the pipeline.

use super::outcome::Outcome;

fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|v| v.trim().is_empty())
}

/// Checks that both login fields are filled in.
pub fn login_fields_present(username: &str, password: &str) -> Outcome {
    if any_blank(&[username, password]) {
        return Outcome::fail("Both username and password are required.");
    }
    Outcome::pass()
}

/// Checks that all three password-change fields are filled in.
pub fn change_fields_present(username: &str, old_password: &str, new_password: &str) -> Outcome {
    if any_blank(&[username, old_password, new_password]) {
        return Outcome::fail("All fields are required.");
    }
    Outcome::pass()
}
