//! Monetary amounts and tolerance helpers.
//!
//! All amounts use `rust_decimal::Decimal` so the $0.01 reconciliation
//! tolerance is exact. Binary floats are never used for money.

use rust_decimal::Decimal;

/// Exact decimal amount (dollars, units, or rates).
pub type Money = Decimal;

/// Reconciliation tolerance: one cent.
pub fn cent() -> Money {
    Decimal::new(1, 2)
}

/// Returns true when two amounts agree within one cent, inclusive.
pub fn within_cent(a: Money, b: Money) -> bool {
    (a - b).abs() <= cent()
}

/// Format an amount for EDI output: plain decimal, two fractional digits,
/// no thousands separators, no currency symbol.
pub fn format_amount(amount: Money) -> String {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    amount.to_string()
}

/// Format a unit count: trailing zeros trimmed so whole units render as
/// integers (`4` not `4.00`) while fractional units keep their precision.
pub fn format_units(units: Money) -> String {
    units.normalize().to_string()
}
