//! Password policy.
//!
//! A candidate password must satisfy every rule; validation reports the
//! first failing rule and stops. The validator has no side effects -
//! callers decide what to show the user.

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// The accepted special symbols.
pub const SPECIAL_SYMBOLS: &str = "!@#$%^&*";

/// A violated password rule. The `Display` form is the user-facing
/// diagnostic for that rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    /// Fewer than [`MIN_PASSWORD_LENGTH`] characters.
    #[error("Password must be at least 8 characters long.")]
    TooShort,
    /// No uppercase ASCII letter.
    #[error("Password must contain at least one uppercase letter.")]
    NoUppercase,
    /// No character from [`SPECIAL_SYMBOLS`].
    #[error("Password must contain at least one special symbol (!@#$%^&*).")]
    NoSpecialSymbol,
}

/// Check a candidate password against the policy, reporting the first
/// failing rule.
///
/// # Errors
///
/// Returns the first violated rule, in order: length, uppercase,
/// special symbol.
pub fn validate(candidate: &str) -> Result<(), PasswordPolicyError> {
    if candidate.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort);
    }
    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::NoUppercase);
    }
    if !candidate.chars().any(|c| SPECIAL_SYMBOLS.contains(c)) {
        return Err(PasswordPolicyError::NoSpecialSymbol);
    }
    Ok(())
}

/// Whether a candidate password satisfies the whole policy.
#[must_use]
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}
