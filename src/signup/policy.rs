//! Password-strength policy, evaluated locally before any network call.
//!
//! Every rule is checked on every evaluation so the caller can display all
//! failing rules at once; the empty violation list is the sole success
//! signal. The same function feeds live per-keystroke feedback and the
//! submit gate, keeping one rule set for both call sites.

/// Password length bounds, counted in characters.
pub const MIN_LENGTH: usize = 10;
pub const MAX_LENGTH: usize = 24;

pub const TOO_SHORT: &str = "Password must be at least 10 characters";
pub const TOO_LONG: &str = "Password must be at most 24 characters";
pub const NO_SPACES: &str = "Password must not contain spaces";
pub const NEEDS_DIGIT: &str = "Password must contain a digit";
pub const NEEDS_UPPERCASE: &str = "Password must contain an uppercase letter";
pub const NEEDS_LOWERCASE: &str = "Password must contain a lowercase letter";

/// Evaluate every rule, in fixed order, against a candidate password.
#[must_use]
pub fn violations(password: &str) -> Vec<&'static str> {
    let mut failed = Vec::new();
    let length = password.chars().count();

    if length < MIN_LENGTH {
        failed.push(TOO_SHORT);
    }

    if length > MAX_LENGTH {
        failed.push(TOO_LONG);
    }

    if password.contains(' ') {
        failed.push(NO_SPACES);
    }

    if !password.chars().any(|character| character.is_ascii_digit()) {
        failed.push(NEEDS_DIGIT);
    }

    if !password.chars().any(char::is_uppercase) {
        failed.push(NEEDS_UPPERCASE);
    }

    if !password.chars().any(char::is_lowercase) {
        failed.push(NEEDS_LOWERCASE);
    }

    failed
}
