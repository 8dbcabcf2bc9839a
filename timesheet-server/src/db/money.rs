//! Money conversion between the store and `Decimal`
//!
//! The store keeps integer minor units (cents). Amounts are exact in both
//! directions; an amount finer than a cent is rejected instead of rounded.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Decimal places of every stored amount
pub const MONEY_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    #[error("amount {0} has more than two decimal places")]
    TooPrecise(Decimal),

    #[error("amount {0} is out of range")]
    OutOfRange(Decimal),
}

/// Stored cents → decimal with two places
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, MONEY_SCALE)
}

/// Decimal → stored cents
pub fn to_cents(amount: Decimal) -> Result<i64, MoneyError> {
    let scaled = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::OutOfRange(amount))?;
    if !scaled.fract().is_zero() {
        return Err(MoneyError::TooPrecise(amount));
    }
    scaled.to_i64().ok_or(MoneyError::OutOfRange(amount))
}
