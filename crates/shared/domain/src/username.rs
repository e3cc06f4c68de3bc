//! Username value object.
//!
//! DDD: Value object - immutable, compared by value, valid by construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MIN_USERNAME_LENGTH;
use crate::error::{DomainError, DomainResult};

/// A validated username.
///
/// Surrounding whitespace is trimmed; the remaining value must be at least
/// [`MIN_USERNAME_LENGTH`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Parse and validate a raw username.
    ///
    /// # Errors
    /// Returns a validation error if the value is blank or too short.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DomainError::validation("Username must not be blank"));
        }

        if trimmed.chars().count() < MIN_USERNAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Username must be at least {} characters",
                MIN_USERNAME_LENGTH
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let username = Username::parse("johndoe").unwrap();
        assert_eq!(username.as_str(), "johndoe");
    }

    #[test]
    fn test_username_is_trimmed() {
        let username = Username::parse("  johndoe \t").unwrap();
        assert_eq!(username.as_str(), "johndoe");
    }

    #[test]
    fn test_username_minimum_length() {
        // Exactly 3 characters should work
        assert!(Username::parse("abc").is_ok());
    }

    #[test]
    fn test_username_too_short() {
        for raw in ["", "a", "ab", "jo", "  jo  "] {
            let result = Username::parse(raw);
            assert!(
                matches!(result, Err(DomainError::Validation(_))),
                "expected {:?} to be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_username_blank() {
        let err = Username::parse("    ").unwrap_err();
        assert_eq!(err.message(), "Username must not be blank");
    }

    #[test]
    fn test_username_counts_characters_not_bytes() {
        // Two characters, four bytes
        assert!(Username::parse("éé").is_err());
        assert!(Username::parse("ééé").is_ok());
    }

    #[test]
    fn test_username_serde_validates() {
        let parsed: Username = serde_json::from_str("\"johndoe\"").unwrap();
        assert_eq!(parsed.as_str(), "johndoe");

        let rejected = serde_json::from_str::<Username>("\"jo\"");
        assert!(rejected.is_err());
    }
}
