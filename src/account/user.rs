use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;
use uuid::Uuid;

/// A registered account record, as persisted in the user blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Obfuscated password, see [`obfuscate_password`]. Not a hash.
    pub password_digest: String,
    pub created_at: DateTime<Utc>,
}

/// Password policy failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("password must be at least 8 characters long")]
    TooShort,
    #[error(
        "password must contain at least one uppercase letter, one lowercase letter, and one number"
    )]
    MissingCharacterClasses,
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"))
}

/// Shape-check an email address.
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Check a password against the sign-up policy: at least 8 characters,
/// with at least one lowercase letter, one uppercase letter, and one digit.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < 8 {
        return Err(PasswordError::TooShort);
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        return Err(PasswordError::MissingCharacterClasses);
    }
    Ok(())
}

/// Strip markup-significant characters from user input.
pub fn sanitize_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect()
}

/// Obfuscate a password for the demo account store.
///
/// This is base64 over a salted concatenation: reversible, and in no way
/// a substitute for real password hashing. It keeps raw passwords out of
/// the demo store, nothing more. A real deployment needs a server-side
/// credential store and a vetted password hash.
pub fn obfuscate_password(password: &str) -> String {
    let salted = format!("{password}wiremit_salt_{}", password.chars().count());
    BASE64.encode(salted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("parent@example.com"));
        assert!(validate_email("a.b+c@mail.co.zw"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("two@@example.com"));
        assert!(!validate_email("spaces in@example.com"));
        assert!(!validate_email("missing@tld"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_password_too_short() {
        assert_eq!(validate_password("Ab1"), Err(PasswordError::TooShort));
    }

    #[test]
    fn test_password_needs_all_classes() {
        assert_eq!(
            validate_password("alllowercase1"),
            Err(PasswordError::MissingCharacterClasses)
        );
        assert_eq!(
            validate_password("ALLUPPERCASE1"),
            Err(PasswordError::MissingCharacterClasses)
        );
        assert_eq!(
            validate_password("NoDigitsHere"),
            Err(PasswordError::MissingCharacterClasses)
        );
    }

    #[test]
    fn test_password_accepted() {
        assert!(validate_password("Secur3Pass").is_ok());
    }

    #[test]
    fn test_sanitize_strips_markup_characters() {
        assert_eq!(
            sanitize_input("<script>alert('x')</script>"),
            "scriptalert(x)/script"
        );
        assert_eq!(sanitize_input("Tendai Moyo"), "Tendai Moyo");
    }

    #[test]
    fn test_obfuscation_is_deterministic() {
        assert_eq!(obfuscate_password("Secur3Pass"), obfuscate_password("Secur3Pass"));
        assert_ne!(obfuscate_password("Secur3Pass"), obfuscate_password("secur3pass"));
    }

    #[test]
    fn test_obfuscation_is_not_plaintext() {
        let digest = obfuscate_password("Secur3Pass");
        assert!(!digest.contains("Secur3Pass"));
    }
}
