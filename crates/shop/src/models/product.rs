//! Product domain type.

use rust_decimal::Decimal;

/// One purchasable product, as loaded from the catalog source.
///
/// Stock (`units`) is owned by the catalog for the duration of a session;
/// the cart references products by name and never aliases these records.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product name. The catalog keeps duplicate names as separate rows.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Remaining available stock.
    pub units: u64,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub const fn new(name: String, price: Decimal, units: u64) -> Self {
        Self { name, price, units }
    }
}
