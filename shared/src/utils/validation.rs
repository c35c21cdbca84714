//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum username length after trimming
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum phone length when a phone is given
pub const MIN_PHONE_LENGTH: usize = 7;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern is valid")
});

/// Names of the fields whose value is absent or blank
pub fn missing_fields<'a>(fields: &[(&'a str, Option<&str>)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.map(|v| v.trim().is_empty()).unwrap_or(true))
        .map(|(name, _)| *name)
        .collect()
}

/// Common validation functions
pub mod validators {
    use super::*;

    /// Check if a trimmed string has at least `min` characters
    pub fn min_length(value: &str, min: usize) -> bool {
        value.trim().chars().count() >= min
    }

    /// Check if an email address is valid (single `@` with text on both sides)
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email.trim())
    }

    /// Usernames need at least three characters
    pub fn is_valid_username(username: &str) -> bool {
        min_length(username, MIN_USERNAME_LENGTH)
    }

    /// Passwords are not trimmed; length is counted as given
    pub fn is_valid_password(password: &str) -> bool {
        password.chars().count() >= MIN_PASSWORD_LENGTH
    }

    pub fn is_valid_phone(phone: &str) -> bool {
        min_length(phone, MIN_PHONE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ana@club.com"));
        assert!(is_valid_email("  ANA@club  "));
        assert!(!is_valid_email("ana.club.com"));
        assert!(!is_valid_email("@club.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("a b@club.com"));
    }

    #[test]
    fn test_length_rules() {
        assert!(is_valid_username("ana"));
        assert!(!is_valid_username(" an "));
        assert!(is_valid_password("secret"));
        assert!(!is_valid_password("12345"));
        assert!(is_valid_phone("5551234"));
        assert!(!is_valid_phone("555"));
    }

    #[test]
    fn test_missing_fields_reports_blank_and_absent() {
        let missing = missing_fields(&[
            ("username", Some("ana")),
            ("email", Some("   ")),
            ("password", None),
        ]);
        assert_eq!(missing, vec!["email", "password"]);
    }
}
