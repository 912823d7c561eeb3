//! Authentication service.
//!
//! Login scans the in-memory user list; registration appends and persists.
//! Both are pure decisions over their inputs except for registration's
//! single save on success - messaging belongs to the caller.

use rust_decimal::Decimal;

use corner_market_core::{PasswordPolicyError, Username, password};

use crate::models::{Session, UserRecord};
use crate::store::{StoreError, UserStore};

/// The result of a login attempt.
///
/// Callers that only care about success can match on `Success`; the other
/// variants exist so the login flow can word its messages.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials matched; the session carries the stored username
    /// spelling and wallet.
    Success(Session),
    /// The username exists but the password does not match.
    WrongPassword,
    /// No record matches the username.
    NotRegistered,
}

/// Attempt to log in against a snapshot of the user list.
///
/// The scan is in list order and stops at the first case-insensitive
/// username match; the password comparison is also case-insensitive.
/// Side-effect-free and idempotent.
#[must_use]
pub fn login(username: &str, password: &str, users: &[UserRecord]) -> LoginOutcome {
    for record in users {
        if record.username.eq_ignore_case(username) {
            if record.password.to_lowercase() == password.to_lowercase() {
                return LoginOutcome::Success(Session {
                    username: record.username.clone(),
                    wallet: record.wallet,
                });
            }
            // The first username match decides; later records with the
            // same name are never consulted.
            return LoginOutcome::WrongPassword;
        }
    }
    LoginOutcome::NotRegistered
}

/// The result of a registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// The new record was appended and the store persisted.
    Registered,
    /// A record with this username already exists (any casing). Nothing
    /// was mutated or persisted.
    DuplicateUsername,
    /// The password fails the policy. Nothing was mutated or persisted.
    InvalidPassword(PasswordPolicyError),
}

/// Register a new user with a zero wallet.
///
/// On success the record is appended to `users` and the full list is
/// persisted through the store. Rejections leave `users` and the store
/// untouched.
///
/// # Errors
///
/// Returns `StoreError` if persisting the accepted registration fails.
pub fn register(
    username: &str,
    candidate_password: &str,
    users: &mut Vec<UserRecord>,
    store: &UserStore,
) -> Result<RegisterOutcome, StoreError> {
    if users
        .iter()
        .any(|record| record.username.eq_ignore_case(username))
    {
        return Ok(RegisterOutcome::DuplicateUsername);
    }

    if let Err(rule) = password::validate(candidate_password) {
        return Ok(RegisterOutcome::InvalidPassword(rule));
    }

    users.push(UserRecord {
        username: Username::new(username),
        password: candidate_password.to_owned(),
        wallet: Decimal::ZERO,
    });
    store.save_users(users)?;
    tracing::debug!(%username, "registered new user");
    Ok(RegisterOutcome::Registered)
}
