//! The login-or-register prompt flow.
//!
//! Loops until a session is established or the user quits. Unknown
//! usernames are offered registration; a freshly registered user comes
//! back around to the login prompt.

use crate::models::Session;
use crate::store::{StoreError, UserStore};
use crate::ui::Console;

use super::auth::{self, LoginOutcome, RegisterOutcome};

/// How the login flow ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFlowOutcome {
    /// A session was established.
    Session(Session),
    /// The user quit at a prompt.
    Quit,
}

fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("q")
}

/// Run the login flow against the user store.
///
/// The user list is reloaded from the store on every attempt, so a
/// registration made in one iteration is visible to the next login.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read (a missing store file
/// is fatal to the whole program) or a registration cannot be persisted.
pub fn login_or_register(
    store: &UserStore,
    console: &mut dyn Console,
) -> Result<LoginFlowOutcome, StoreError> {
    loop {
        let username = console.prompt("Enter your username (or 'q' to quit): ");
        if is_quit(&username) {
            return Ok(LoginFlowOutcome::Quit);
        }
        let password = console.prompt("Enter your password (or 'q' to quit): ");
        if is_quit(&password) {
            return Ok(LoginFlowOutcome::Quit);
        }

        let mut users = store.load_users()?;
        match auth::login(&username, &password, &users) {
            LoginOutcome::Success(session) => {
                console.say("Successfully logged in.");
                tracing::debug!(user = %session.username, "login succeeded");
                return Ok(LoginFlowOutcome::Session(session));
            }
            LoginOutcome::WrongPassword => {
                console.say("Login failed.");
            }
            LoginOutcome::NotRegistered => {
                console.say("User is not registered.");
                console.say("Username not found.");
                let choice = console.prompt("Would you like to register? (yes/no): ");
                if choice.trim().eq_ignore_ascii_case("yes") {
                    let candidate =
                        console.prompt("Enter a password for registration: ");
                    match auth::register(&username, candidate.trim(), &mut users, store)? {
                        RegisterOutcome::Registered => {
                            console.say(&format!("User '{username}' successfully registered."));
                        }
                        RegisterOutcome::DuplicateUsername => {
                            console.say(&format!("Username '{username}' is already taken."));
                        }
                        RegisterOutcome::InvalidPassword(rule) => {
                            console.say(&rule.to_string());
                            console.say("Registration failed due to invalid password.");
                        }
                    }
                } else {
                    console.say("Registration skipped.");
                }
            }
        }
    }
}
