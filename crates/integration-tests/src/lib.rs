//! Integration tests for Corner Market.
//!
//! Every test drives the real login and checkout flows end to end through
//! a [`ScriptedConsole`], against a real user-store file in a temp
//! directory and a catalog parsed from real CSV.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p corner-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `login_flows` - Login, quit, and registration journeys
//! - `checkout_sessions` - Full shopping sessions over the checkout loop
//! - `store_files` - File-level contracts of the user store and catalog
//!
//! [`ScriptedConsole`]: corner_market_shop::ui::ScriptedConsole

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use std::io::Write;

use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use corner_market_shop::models::{Product, UserRecord};
use corner_market_shop::store::{self, UserStore};

/// A users file plus a loaded catalog, ready to hand to the flows.
pub struct TestContext {
    users_file: NamedTempFile,
    /// Repository over the temp users file.
    pub store: UserStore,
    /// Catalog parsed from the provided CSV.
    pub catalog: Vec<Product>,
}

impl TestContext {
    /// Build a context from user-store JSON and catalog CSV contents.
    ///
    /// # Panics
    ///
    /// Panics if the fixtures cannot be written or parsed - a broken
    /// fixture should fail the test immediately.
    #[must_use]
    pub fn new(users_json: &str, products_csv: &str) -> Self {
        let mut users_file = NamedTempFile::new().unwrap();
        users_file.write_all(users_json.as_bytes()).unwrap();
        let store = UserStore::new(users_file.path());

        let mut products_file = NamedTempFile::new().unwrap();
        products_file.write_all(products_csv.as_bytes()).unwrap();
        let catalog = store::load_products(products_file.path()).unwrap();

        Self {
            users_file,
            store,
            catalog,
        }
    }

    /// The records currently persisted in the users file.
    ///
    /// # Panics
    ///
    /// Panics if the file no longer parses.
    #[must_use]
    pub fn stored_users(&self) -> Vec<UserRecord> {
        self.store.load_users().unwrap()
    }

    /// The persisted wallet of `username` (exact match).
    ///
    /// # Panics
    ///
    /// Panics if no such record exists.
    #[must_use]
    pub fn stored_wallet(&self, username: &str) -> Decimal {
        self.stored_users()
            .into_iter()
            .find(|record| record.username.as_str() == username)
            .map(|record| record.wallet)
            .unwrap()
    }

    /// Raw contents of the users file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn raw_users_file(&self) -> String {
        std::fs::read_to_string(self.users_file.path()).unwrap()
    }
}

/// The standard two-user store fixture.
#[must_use]
pub const fn demo_users_json() -> &'static str {
    r#"[
  {"username": "user", "password": "Valid123!", "wallet": 100.0},
  {"username": "anotheruser", "password": "Apassword1@", "wallet": 11.7}
]"#
}

/// The standard four-product catalog fixture, including one out-of-stock
/// row.
#[must_use]
pub const fn demo_products_csv() -> &'static str {
    "Product,Price,Units\n\
     Product 1,25,5\n\
     Product 2,20,3\n\
     Product 3,15,5\n\
     Product 4,20,0\n"
}
