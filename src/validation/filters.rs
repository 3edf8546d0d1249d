//! Catalog filter input checks
//!
//! Validates the raw region and age-range strings entered on the query
//! screen before they reach the catalog store.

use super::outcome::Outcome;

/// Default lower age bound when the left field is left empty.
pub const DEFAULT_MIN_AGE: i32 = 0;

/// Default upper age bound when the right field is left empty.
pub const DEFAULT_MAX_AGE: i32 = 100;

/// Checks that a region is non-empty and consists of ASCII letters only.
pub fn region(value: &str) -> Outcome {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Outcome::fail("Region must be alphabetic.");
    }
    Outcome::pass()
}

/// Checks a raw age-range pair and resolves the effective bounds.
///
/// An empty field falls back to its default bound. Non-empty fields must be
/// exact base-10 integers: surrounding whitespace or trailing characters are
/// format errors, and negative values are accepted here (sign policy belongs
/// to the query flow). On success the parsed `(lower, upper)` pair is
/// returned alongside the outcome.
pub fn age_range(left: &str, right: &str) -> (Outcome, Option<(i32, i32)>) {
    let lower = if left.is_empty() {
        Ok(DEFAULT_MIN_AGE)
    } else {
        left.parse::<i32>()
    };
    let upper = if right.is_empty() {
        Ok(DEFAULT_MAX_AGE)
    } else {
        right.parse::<i32>()
    };

    match (lower, upper) {
        (Ok(l), Ok(r)) => {
            if l > r {
                (
                    Outcome::fail("Lower bound must not exceed upper bound."),
                    None,
                )
            } else {
                (Outcome::pass(), Some((l, r)))
            }
        }
        _ => (Outcome::fail("Invalid age format."), None),
    }
}
