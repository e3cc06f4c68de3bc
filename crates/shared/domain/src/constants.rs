//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum username length, counted in characters
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Separator between the local and domain part of an email address
pub const EMAIL_SEPARATOR: char = '@';

// =============================================================================
// Defaults
// =============================================================================

/// Accounts are active from the moment they are created
pub const DEFAULT_USER_ENABLED: bool = true;
