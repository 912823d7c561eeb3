//! Login, quit, and registration journeys through the prompt flow.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use corner_market_integration_tests::{TestContext, demo_products_csv, demo_users_json};
use corner_market_shop::services::login::{self, LoginFlowOutcome};
use corner_market_shop::ui::ScriptedConsole;

fn run_login(ctx: &TestContext, inputs: &[&str]) -> (ScriptedConsole, LoginFlowOutcome) {
    let mut console = ScriptedConsole::new(inputs.iter().copied());
    let outcome = login::login_or_register(&ctx.store, &mut console).unwrap();
    (console, outcome)
}

#[test]
fn test_quit_at_username_prompt() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (console, outcome) = run_login(&ctx, &["q"]);
    assert_eq!(outcome, LoginFlowOutcome::Quit);
    assert!(console.output().is_empty());
}

#[test]
fn test_quit_at_password_prompt() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (_console, outcome) = run_login(&ctx, &["user", "q"]);
    assert_eq!(outcome, LoginFlowOutcome::Quit);
}

#[test]
fn test_login_is_case_insensitive_but_session_keeps_stored_spelling() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (console, outcome) = run_login(&ctx, &["USER", "valid123!"]);

    assert!(console.printed("Successfully logged in."));
    let LoginFlowOutcome::Session(session) = outcome else {
        panic!("expected a session");
    };
    assert_eq!(session.username.as_str(), "user");
    assert_eq!(session.wallet, Decimal::from(100));
}

#[test]
fn test_wrong_password_then_retry() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (console, outcome) = run_login(&ctx, &["user", "nope", "user", "Valid123!"]);

    assert!(console.printed("Login failed."));
    assert!(matches!(outcome, LoginFlowOutcome::Session(_)));
}

#[test]
fn test_failed_logins_never_mutate_the_store() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let before = ctx.stored_users();
    let (_console, outcome) = run_login(&ctx, &["user", "nope", "q"]);

    assert_eq!(outcome, LoginFlowOutcome::Quit);
    assert_eq!(ctx.stored_users(), before);
}

#[test]
fn test_register_new_user_then_log_in() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (console, outcome) = run_login(
        &ctx,
        &[
            "newuser",
            "FirstTry1!",
            "yes",
            "FirstTry1!",
            "newuser",
            "FirstTry1!",
        ],
    );

    assert!(console.printed("User is not registered."));
    assert!(console.printed("Username not found."));
    assert!(console.printed("User 'newuser' successfully registered."));
    assert!(console.printed("Successfully logged in."));

    let LoginFlowOutcome::Session(session) = outcome else {
        panic!("expected a session");
    };
    assert_eq!(session.username.as_str(), "newuser");
    assert_eq!(session.wallet, Decimal::ZERO);
    assert_eq!(ctx.stored_wallet("newuser"), Decimal::ZERO);
    assert_eq!(ctx.stored_users().len(), 3);
}

#[test]
fn test_registration_declined_leaves_store_unchanged() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (console, outcome) = run_login(&ctx, &["newuser", "whatever", "no", "q"]);

    assert!(console.printed("Registration skipped."));
    assert_eq!(outcome, LoginFlowOutcome::Quit);
    assert_eq!(ctx.stored_users().len(), 2);
}

#[test]
fn test_registration_password_rules_reported_one_at_a_time() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (console, _outcome) = run_login(
        &ctx,
        &[
            // Too short.
            "newuser", "x", "yes", "short",
            // No uppercase.
            "newuser", "x", "yes", "nocapital1!",
            // No special symbol.
            "newuser", "x", "yes", "NoSymbol1",
            "q",
        ],
    );

    assert!(console.printed("Password must be at least 8 characters long."));
    assert!(console.printed("Password must contain at least one uppercase letter."));
    assert!(console.printed("Password must contain at least one special symbol (!@#$%^&*)."));
    assert!(console.printed("Registration failed due to invalid password."));
    assert_eq!(ctx.stored_users().len(), 2);
}

#[test]
fn test_registered_user_starts_with_empty_wallet_and_cart() {
    use corner_market_shop::services::checkout::{self, CheckoutState};

    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let (_console, outcome) = run_login(
        &ctx,
        &["newuser", "FirstTry1!", "yes", "FirstTry1!", "newuser", "FirstTry1!"],
    );
    let LoginFlowOutcome::Session(session) = outcome else {
        panic!("expected a session");
    };

    // A fresh wallet cannot buy anything.
    let mut console = ScriptedConsole::new(["1", "co", "y", "l", "y"]);
    let mut state = CheckoutState::new(session, ctx.catalog.clone());
    checkout::run(&mut state, &ctx.store, &mut console).unwrap();

    assert!(console.printed(
        "You don't have enough money to complete the purchase. Please try again!"
    ));
    assert_eq!(ctx.stored_wallet("newuser"), Decimal::ZERO);
}
