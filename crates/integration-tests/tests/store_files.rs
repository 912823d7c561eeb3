//! File-level contracts of the user store and the catalog source.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use corner_market_integration_tests::{TestContext, demo_products_csv, demo_users_json};
use corner_market_shop::services::login;
use corner_market_shop::store::{self, CatalogError, StoreError, UserStore};
use corner_market_shop::ui::ScriptedConsole;

fn temp_file_with(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_users_file_is_fatal_to_the_login_flow() {
    let store = UserStore::new("/nonexistent/corner-market/users.json");
    let mut console = ScriptedConsole::new(["user", "Valid123!"]);
    let err = login::login_or_register(&store, &mut console).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_malformed_users_file_is_an_error() {
    let file = temp_file_with("{\"username\": \"not an array\"}");
    let store = UserStore::new(file.path());
    assert!(matches!(store.load_users(), Err(StoreError::Malformed(_))));
}

#[test]
fn test_update_wallet_unknown_username_rewrites_records_unchanged() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    let before = ctx.stored_users();
    ctx.store.update_wallet("nobody", Decimal::from(1)).unwrap();
    assert_eq!(ctx.stored_users(), before);
}

#[test]
fn test_update_wallet_is_exact_case_match() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    ctx.store.update_wallet("USER", Decimal::from(1)).unwrap();
    // The case-insensitive login rule does not apply to wallet updates.
    assert_eq!(ctx.stored_wallet("user"), Decimal::from(100));
}

#[test]
fn test_store_file_remains_loadable_after_updates() {
    let ctx = TestContext::new(demo_users_json(), demo_products_csv());
    ctx.store.update_wallet("user", Decimal::from(42)).unwrap();
    ctx.store.update_wallet("user", Decimal::from(7)).unwrap();
    assert_eq!(ctx.stored_wallet("user"), Decimal::from(7));
    assert!(ctx.raw_users_file().contains("anotheruser"));
}

#[test]
fn test_catalog_loads_in_file_order_with_zero_stock_rows() {
    let file = temp_file_with(demo_products_csv());
    let products = store::load_products(file.path()).unwrap();
    assert_eq!(products.len(), 4);
    assert_eq!(products[0].name, "Product 1");
    assert_eq!(products[3].units, 0);
}

#[test]
fn test_catalog_missing_file() {
    let err = store::load_products(std::path::Path::new(
        "/nonexistent/corner-market/products.csv",
    ))
    .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_catalog_missing_column() {
    let file = temp_file_with("Product,Price\nApple,2\n");
    let err = store::load_products(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::MissingColumn { line: 2 }));
}

#[test]
fn test_catalog_non_numeric_price() {
    let file = temp_file_with("Product,Price,Units\nApple,abc,10\n");
    let err = store::load_products(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidPrice { line: 2, .. }));
}

#[test]
fn test_catalog_non_numeric_units() {
    let file = temp_file_with("Product,Price,Units\nApple,2,many\n");
    let err = store::load_products(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidUnits { line: 2, .. }));
}
