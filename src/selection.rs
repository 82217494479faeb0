//! Purchase selection
//!
//! Screen-local state for the purchase confirmation step: which cart lines
//! the user is carrying forward into the purchase. This is not cart state;
//! it is rebuilt from the cart whenever the cart changes and discarded
//! with the screen.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};

use crate::{
    cart::CartLedger,
    pricing::{self, PricingError},
    products::Product,
};

/// One product with its associated quantity in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    /// Create a line. Quantities below 1 are clamped to 1.
    #[must_use]
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    /// The product on this line.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// How many units of the product are on this line.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Selection flags over the cart lines, keyed by the full line.
///
/// Keying by `(product, quantity)` means a line whose quantity changed
/// counts as a new line and reverts to the default: selected. Lines that
/// left the cart drop out of the selection on the next sync.
#[derive(Clone, Debug, Default)]
pub struct PurchaseSelection {
    lines: IndexMap<CartLine, bool>,
}

impl PurchaseSelection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: IndexMap::new(),
        }
    }

    /// Rebuild the selection against the current cart, in cart order.
    /// Unchanged lines keep their flag; new or changed lines start
    /// selected.
    pub fn sync(&mut self, cart: &CartLedger) {
        let lines = cart
            .iter()
            .map(|(product, quantity)| {
                let line = CartLine::new(product.clone(), quantity);
                let selected = self.lines.get(&line).copied().unwrap_or(true);

                (line, selected)
            })
            .collect();

        self.lines = lines;
    }

    /// Mark a line as selected or not. Lines not in the selection are
    /// left alone.
    pub fn set_selected(&mut self, line: &CartLine, selected: bool) {
        if let Some(flag) = self.lines.get_mut(line) {
            *flag = selected;
        }
    }

    /// Iterate over all lines and their flags, in cart order.
    pub fn iter(&self) -> impl Iterator<Item = (&CartLine, bool)> {
        self.lines.iter().map(|(line, selected)| (line, *selected))
    }

    /// Iterate over the selected lines only.
    pub fn selected_lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines
            .iter()
            .filter_map(|(line, selected)| selected.then_some(line))
    }

    /// The products on the selected lines, ready to hand to
    /// [`CartLedger::purchase`].
    #[must_use]
    pub fn selected_products(&self) -> FxHashSet<Product> {
        self.selected_lines()
            .map(|line| line.product().clone())
            .collect()
    }

    /// Total price of the selected lines.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if an amount cannot be settled to minor
    /// units or the lines mix currencies.
    pub fn selected_subtotal(&self) -> Result<Money<'static, Currency>, PricingError> {
        pricing::subtotal(
            self.selected_lines()
                .map(|line| (line.product(), line.quantity())),
        )
    }

    /// Whether at least one line is selected. Drives the "continue
    /// purchase" button.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.lines.values().any(|selected| *selected)
    }

    /// Number of lines tracked by the selection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the selection tracks no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{discounts::DiscountPolicy, products::DEFAULT_CURRENCY};

    use super::*;

    fn product(code: &str, price: i64) -> Product {
        Product::new(code, format!("{code} product"), Decimal::from(price), DiscountPolicy::None)
    }

    fn cart_with(entries: &[(&Product, u32)]) -> CartLedger {
        let mut cart = CartLedger::new();

        for (product, quantity) in entries {
            for _ in 0..*quantity {
                cart.add_one((*product).clone());
            }
        }

        cart
    }

    #[test]
    fn sync_selects_every_line_by_default() {
        let mug = product("MUG", 8);
        let shirt = product("TSHIRT", 20);
        let cart = cart_with(&[(&mug, 2), (&shirt, 1)]);

        let mut selection = PurchaseSelection::new();
        selection.sync(&cart);

        assert_eq!(selection.len(), 2);
        assert!(selection.has_selection());
        assert!(selection.iter().all(|(_, selected)| selected));
    }

    #[test]
    fn deselection_survives_a_sync_of_an_unchanged_cart() {
        let mug = product("MUG", 8);
        let cart = cart_with(&[(&mug, 2)]);

        let mut selection = PurchaseSelection::new();
        selection.sync(&cart);

        let line = CartLine::new(mug, 2);
        selection.set_selected(&line, false);
        selection.sync(&cart);

        assert!(!selection.has_selection());
    }

    #[test]
    fn quantity_change_resets_the_line_to_selected() {
        let mug = product("MUG", 8);
        let mut cart = cart_with(&[(&mug, 1)]);

        let mut selection = PurchaseSelection::new();
        selection.sync(&cart);
        selection.set_selected(&CartLine::new(mug.clone(), 1), false);

        cart.add_one(mug.clone());
        selection.sync(&cart);

        assert!(selection.has_selection());
    }

    #[test]
    fn lines_removed_from_the_cart_drop_out_on_sync() {
        let mug = product("MUG", 8);
        let shirt = product("TSHIRT", 20);
        let mut cart = cart_with(&[(&mug, 1), (&shirt, 1)]);

        let mut selection = PurchaseSelection::new();
        selection.sync(&cart);

        cart.remove_product(&mug);
        selection.sync(&cart);

        assert_eq!(selection.len(), 1);
        let remaining: Vec<&str> = selection
            .selected_lines()
            .map(|line| line.product().code())
            .collect();
        assert_eq!(remaining, ["TSHIRT"]);
    }

    #[test]
    fn selected_products_feed_a_purchase() {
        let mug = product("MUG", 8);
        let shirt = product("TSHIRT", 20);
        let mut cart = cart_with(&[(&mug, 2), (&shirt, 1)]);

        let mut selection = PurchaseSelection::new();
        selection.sync(&cart);
        selection.set_selected(&CartLine::new(shirt.clone(), 1), false);

        cart.purchase(&selection.selected_products());

        assert!(!cart.contains(&mug));
        assert_eq!(cart.quantity(&shirt), Some(1));
    }

    #[test]
    fn selected_subtotal_prices_only_the_selected_lines() -> TestResult {
        let mug = product("MUG", 8);
        let shirt = product("TSHIRT", 20);
        let cart = cart_with(&[(&mug, 2), (&shirt, 1)]);

        let mut selection = PurchaseSelection::new();
        selection.sync(&cart);
        selection.set_selected(&CartLine::new(shirt, 1), false);

        assert_eq!(
            selection.selected_subtotal()?,
            Money::from_minor(1600, DEFAULT_CURRENCY)
        );

        Ok(())
    }

    #[test]
    fn empty_selection_has_nothing_selected() -> TestResult {
        let selection = PurchaseSelection::new();

        assert!(selection.is_empty());
        assert!(!selection.has_selection());
        assert_eq!(
            selection.selected_subtotal()?,
            Money::from_minor(0, DEFAULT_CURRENCY)
        );

        Ok(())
    }

    #[test]
    fn cart_line_clamps_zero_quantities() {
        let line = CartLine::new(product("MUG", 8), 0);

        assert_eq!(line.quantity(), 1);
    }
}
