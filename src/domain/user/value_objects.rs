// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::text::bounded_text;
use std::fmt;

bounded_text!(PersonName, "name", 128);
bounded_text!(Username, "username", 32);
bounded_text!(PictureUrl, "picture url", 512);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    const MAX_CHARS: usize = 254;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if value.chars().count() > Self::MAX_CHARS || !Self::looks_valid(&value) {
            return Err(DomainError::validation("email is not a valid address"));
        }
        Ok(Self(value))
    }

    fn looks_valid(value: &str) -> bool {
        if value.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        !local.is_empty()
            && !domain.is_empty()
            && !domain.contains('@')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_plain_addresses() {
        let email = Email::new("  ada@example.com ").unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for raw in ["", "ada", "@example.com", "ada@", "a b@example.com", "a@b@c", "ada@.com"] {
            assert!(Email::new(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn username_is_bounded() {
        assert!(Username::new("a".repeat(32)).is_ok());
        assert!(Username::new("a".repeat(33)).is_err());
    }
}
