//! Validation outcome type
//!
//! Defines the result value shared by all field and credential checks,
//! plus the ordered-chain runner that evaluates checks in priority order.

/// Result of a validation check.
///
/// `message` is empty on success, with one exception: the default-password
/// login case succeeds with a non-empty message that callers must branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
}

impl Outcome {
    /// Successful outcome with an empty message.
    pub fn pass() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    /// Successful outcome carrying a message the caller must inspect.
    pub fn pass_with(message: &str) -> Self {
        Self {
            ok: true,
            message: message.to_string(),
        }
    }

    /// Failed outcome with a user-facing message.
    pub fn fail(message: &str) -> Self {
        Self {
            ok: false,
            message: message.to_string(),
        }
    }
}

/// Runs checks in order and returns the first failure, or a pass.
///
/// The order of the slice is the priority order of the messages; keeping the
/// checks in an explicit list keeps that order auditable.
pub fn first_failure(checks: &[(bool, &str)]) -> Outcome {
    for (failed, message) in checks {
        if *failed {
            return Outcome::fail(message);
        }
    }
    Outcome::pass()
}
