use super::{FieldError, Observation};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_REGISTRATION_LENGTH: usize = 3;

static REGISTRATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("registration pattern compiles"));
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Registration numbers are at least three ASCII letters or digits.
pub fn validate_registration_number(raw: &str) -> Observation<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Observation::Unknown;
    }

    if trimmed.len() >= MIN_REGISTRATION_LENGTH && REGISTRATION_REGEX.is_match(trimmed) {
        Observation::Valid(trimmed.to_string())
    } else {
        Observation::Invalid(FieldError::Pattern {
            expected: "at least 3 alphanumeric characters",
        })
    }
}

pub fn validate_email(raw: &str) -> Observation<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Observation::Unknown;
    }

    if EMAIL_REGEX.is_match(trimmed) {
        Observation::Valid(trimmed.to_string())
    } else {
        Observation::Invalid(FieldError::Pattern {
            expected: "local@domain.tld",
        })
    }
}
