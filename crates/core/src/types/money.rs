//! Money helpers over decimal arithmetic.
//!
//! Prices and wallet balances are `rust_decimal::Decimal` values. Totals use
//! saturating arithmetic so an out-of-range product can never silently wrap.

use rust_decimal::Decimal;

/// Format an amount for display, without trailing zeros.
///
/// Balances are stored with whatever scale the arithmetic produced
/// (`50.0`, `0.50`); users see the normalized form (`50`, `0.5`).
#[must_use]
pub fn display_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// The cost of one cart line: `price * quantity`, saturating at the
/// representable range.
#[must_use]
pub fn line_total(price: Decimal, quantity: u64) -> Decimal {
    price.saturating_mul(Decimal::from(quantity))
}
