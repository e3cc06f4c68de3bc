//! Email value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_SEPARATOR;
use crate::error::{DomainError, DomainResult};

/// A syntactically valid email address.
///
/// Normalized to lower case with surrounding whitespace removed. The rule is
/// deliberately basic: exactly one `@` with a non-empty local part and a
/// non-empty domain part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and validate a raw email address.
    ///
    /// # Errors
    /// Returns a validation error if the address does not contain exactly one
    /// `@` separating non-empty parts.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let normalized = raw.trim().to_lowercase();

        let mut parts = normalized.split(EMAIL_SEPARATOR);
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => {
                return Err(DomainError::validation(
                    "Email must contain exactly one '@'",
                ))
            }
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::validation(
                "Email must have a local part and a domain",
            ));
        }

        Ok(Self(normalized))
    }

    /// Borrow the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
