//! User domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use corner_market_core::Username;

/// One record in the user store.
///
/// Passwords are stored as plain text and compared case-insensitively at
/// login, reproducing the backing store's existing contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Stored username. Unique under case-insensitive comparison.
    pub username: Username,
    /// Stored password.
    pub password: String,
    /// Wallet balance.
    pub wallet: Decimal,
}

/// An authenticated session: the context the checkout loop runs under.
///
/// Ephemeral - created by a successful login, dropped at logout. The wallet
/// here is the working balance; the store is only updated on a completed
/// checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Username exactly as stored.
    pub username: Username,
    /// Wallet balance at login, then debited by checkouts.
    pub wallet: Decimal,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_record_json_roundtrip() {
        let record = UserRecord {
            username: Username::new("testuser"),
            password: "Valid123!".to_owned(),
            wallet: Decimal::from_str("100.0").unwrap(),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_reads_store_format() {
        let json = r#"{"username": "testuser", "password": "Valid123!", "wallet": 100.0}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.username.as_str(), "testuser");
        assert_eq!(record.wallet, Decimal::from(100));
    }

    #[test]
    fn test_wallet_precision_survives_roundtrip() {
        // A balance with more precision than f64 carries.
        let json = r#"{"username": "u", "password": "p", "wallet": 0.1234567890123456789012345678}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record.wallet,
            Decimal::from_str("0.1234567890123456789012345678").unwrap()
        );
    }
}
