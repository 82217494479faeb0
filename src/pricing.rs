//! Pricing
//!
//! Line totals and subtotals over `(product, quantity)` entries. Amounts
//! are computed in [`Decimal`] and settled to two-decimal minor units,
//! which covers the catalog currencies.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::products::{DEFAULT_CURRENCY, Product};

/// Errors that can occur while settling prices to money.
#[derive(Debug, Error)]
pub enum PricingError {
    /// A computed amount could not be represented in minor units.
    #[error("amount could not be represented in minor units")]
    MinorConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// The total price of one cart line: effective unit price times quantity,
/// rounded half-up to minor units.
///
/// Quantities below 1 are clamped to 1 before pricing.
///
/// # Errors
///
/// - [`PricingError::MinorConversion`]: the amount overflowed the minor
///   unit range.
pub fn line_total(
    product: &Product,
    quantity: u32,
) -> Result<Money<'static, Currency>, PricingError> {
    let quantity = quantity.max(1);
    let unit_price = product.effective_unit_price(quantity);
    let total = unit_price * Decimal::from(quantity);

    Ok(Money::from_minor(to_minor(total)?, product.currency()))
}

/// The combined total of the given cart entries.
///
/// An empty entry set totals to zero in the default currency.
///
/// # Errors
///
/// - [`PricingError::MinorConversion`]: an amount overflowed the minor
///   unit range.
/// - [`PricingError::Money`]: money arithmetic failed, for example due to
///   a currency mismatch between entries.
pub fn subtotal<'a, I>(entries: I) -> Result<Money<'static, Currency>, PricingError>
where
    I: IntoIterator<Item = (&'a Product, u32)>,
{
    let mut entries = entries.into_iter().peekable();

    let currency = match entries.peek() {
        Some((product, _)) => product.currency(),
        None => return Ok(Money::from_minor(0, DEFAULT_CURRENCY)),
    };

    let total = entries.try_fold(
        Money::from_minor(0, currency),
        |acc, (product, quantity)| -> Result<Money<'static, Currency>, PricingError> {
            Ok(acc.add(line_total(product, quantity)?)?)
        },
    )?;

    Ok(total)
}

/// Round an amount half-up to two-decimal minor units.
fn to_minor(amount: Decimal) -> Result<i64, PricingError> {
    amount
        .checked_mul(Decimal::new(100, 0))
        .map(|value| value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|value| value.to_i64())
        .ok_or(PricingError::MinorConversion)
}
