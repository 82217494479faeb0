//! Cart
//!
//! An insertion-ordered ledger of products and their quantities. All
//! mutations are total: subtracting or removing a product that is not in
//! the cart is a no-op, never an error, so UI event handlers can call them
//! unconditionally.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{self, PricingError},
    products::Product,
};

/// An opaque copy of the cart contents, for state round-tripping.
#[derive(Clone, Debug, Default)]
pub struct CartSnapshot {
    lines: IndexMap<Product, u32>,
}

/// The cart: a mapping from product to a positive quantity.
///
/// Every stored quantity is at least 1; an entry whose quantity would drop
/// to zero is removed instead. Iteration follows insertion order, which is
/// what the UI displays.
#[derive(Clone, Debug, Default)]
pub struct CartLedger {
    lines: IndexMap<Product, u32>,
}

impl CartLedger {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: IndexMap::new(),
        }
    }

    /// Add one unit of a product, inserting the line at quantity 1 if the
    /// product is not in the cart yet. Always succeeds; there is no upper
    /// bound on quantities.
    pub fn add_one(&mut self, product: Product) {
        *self.lines.entry(product).or_insert(0) += 1;
    }

    /// Remove one unit of a product.
    ///
    /// A product that is not in the cart is left alone. A line at quantity
    /// 1 is removed entirely. The decrement floors at 1 so a future
    /// refactor of the removal check can never drive a quantity to zero.
    pub fn subtract_one(&mut self, product: &Product) {
        let Some(quantity) = self.lines.get_mut(product) else {
            return;
        };

        if *quantity == 1 {
            self.lines.shift_remove(product);
        } else {
            *quantity = quantity.saturating_sub(1).max(1);
        }
    }

    /// Drop a product's line entirely, whatever its quantity. No-op if the
    /// product is not in the cart.
    ///
    /// This is the irreversible full-removal operation the UI offers
    /// behind a confirmation dialog; it is deliberately separate from
    /// [`subtract_one`](Self::subtract_one).
    pub fn remove_product(&mut self, product: &Product) {
        self.lines.shift_remove(product);
    }

    /// Remove every line whose product was purchased, keeping the rest of
    /// the cart (and its order) untouched. Whole lines are removed;
    /// partial-quantity purchases are not supported.
    pub fn purchase(&mut self, selected: &FxHashSet<Product>) {
        self.lines.retain(|product, _| !selected.contains(product));
    }

    /// Quantity of the given product, if it is in the cart.
    #[must_use]
    pub fn quantity(&self, product: &Product) -> Option<u32> {
        self.lines.get(product).copied()
    }

    /// Whether the product has a line in the cart.
    #[must_use]
    pub fn contains(&self, product: &Product) -> bool {
        self.lines.contains_key(product)
    }

    /// Number of distinct product lines (not total units). This is what
    /// the cart badge displays; any display cap is the UI's business.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Product, u32)> {
        self.lines.iter().map(|(product, quantity)| (product, *quantity))
    }

    /// Total price of one line of this cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the amount cannot be settled to
    /// minor units.
    pub fn line_total(
        &self,
        product: &Product,
        quantity: u32,
    ) -> Result<Money<'static, Currency>, PricingError> {
        pricing::line_total(product, quantity)
    }

    /// Total price of the whole cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if an amount cannot be settled to minor
    /// units or the lines mix currencies.
    pub fn subtotal(&self) -> Result<Money<'static, Currency>, PricingError> {
        pricing::subtotal(self.iter())
    }

    /// Copy the cart contents for later restoration.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
        }
    }

    /// Rebuild a cart from a snapshot, dropping any zero-quantity entries
    /// a foreign snapshot might carry.
    #[must_use]
    pub fn restore(snapshot: CartSnapshot) -> Self {
        let mut lines = snapshot.lines;
        lines.retain(|_, quantity| *quantity > 0);

        Self { lines }
    }
}
