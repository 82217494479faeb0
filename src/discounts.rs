//! Discount policies
//!
//! Each product carries one [`DiscountPolicy`] deciding the effective price
//! per unit for a given quantity. Policies are stateless and reusable
//! across products.

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use rust_decimal::{Decimal, RoundingStrategy};

/// Quantity at which a bulk discount activates when none is specified.
pub const DEFAULT_BULK_THRESHOLD: u32 = 3;

/// A pure bulk-pricing formula: `(quantity, unit price) -> discounted unit price`.
///
/// Cloned handles share the same underlying function and compare equal;
/// two independently constructed formulas are never equal, even if they
/// compute the same prices. This keeps formulas usable inside map keys.
#[derive(Clone)]
pub struct BulkPricer(Arc<dyn Fn(u32, Decimal) -> Decimal + Send + Sync>);

impl BulkPricer {
    /// Wrap a pricing formula.
    pub fn new(pricer: impl Fn(u32, Decimal) -> Decimal + Send + Sync + 'static) -> Self {
        Self(Arc::new(pricer))
    }

    /// A formula taking a fixed amount off the unit price.
    #[must_use]
    pub fn amount_off(amount: Decimal) -> Self {
        Self::new(move |_quantity, unit_price| unit_price - amount)
    }

    /// Evaluate the formula.
    #[must_use]
    pub fn price(&self, quantity: u32, unit_price: Decimal) -> Decimal {
        (self.0)(quantity, unit_price)
    }
}

impl PartialEq for BulkPricer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for BulkPricer {}

impl Hash for BulkPricer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Arc::as_ptr(&self.0) as *const () as usize).hash(state);
    }
}

impl fmt::Debug for BulkPricer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BulkPricer").finish()
    }
}

/// The pricing strategy attached to a product.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum DiscountPolicy {
    /// Every unit is charged at the base price.
    None,

    /// For every 2 units, only 1 is charged.
    TwoForOne,

    /// At or above `threshold` units, `pricer` decides the unit price.
    Bulk {
        /// Minimum quantity at which the formula activates.
        threshold: u32,

        /// Formula computing the discounted per-unit price.
        pricer: BulkPricer,
    },
}

impl DiscountPolicy {
    /// A bulk policy with the default threshold.
    #[must_use]
    pub fn bulk(pricer: BulkPricer) -> Self {
        Self::Bulk {
            threshold: DEFAULT_BULK_THRESHOLD,
            pricer,
        }
    }

    /// The effective price per unit to charge for `quantity` units at
    /// `unit_price` each.
    ///
    /// Quantities below 1 never reach this from the cart layer; a zero
    /// quantity is answered with the base price so the two-for-one
    /// division can never divide by zero.
    #[must_use]
    pub fn effective_unit_price(&self, quantity: u32, unit_price: Decimal) -> Decimal {
        match self {
            Self::None => unit_price,
            Self::TwoForOne => {
                if quantity == 0 {
                    return unit_price;
                }

                let quantity = Decimal::from(quantity);
                let chargeable = (quantity / Decimal::TWO)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

                chargeable * unit_price / quantity
            }
            Self::Bulk { threshold, pricer } => {
                if quantity < *threshold {
                    unit_price
                } else {
                    pricer.price(quantity, unit_price).max(Decimal::ZERO)
                }
            }
        }
    }

    /// Display label for the policy.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "No discount",
            Self::TwoForOne => "2 for 1",
            Self::Bulk { .. } => "Bulk",
        }
    }

    /// Whether this is the two-for-one policy.
    #[must_use]
    pub fn is_two_for_one(&self) -> bool {
        matches!(self, Self::TwoForOne)
    }

    /// Whether this is a bulk policy.
    #[must_use]
    pub fn is_bulk(&self) -> bool {
        matches!(self, Self::Bulk { .. })
    }
}

impl fmt::Debug for DiscountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::TwoForOne => f.write_str("TwoForOne"),
            Self::Bulk { threshold, .. } => f
                .debug_struct("Bulk")
                .field("threshold", threshold)
                .finish_non_exhaustive(),
        }
    }
}
