//! Storefront state
//!
//! The single-writer state container the UI talks to. Every UI event maps
//! 1:1 to one state operation, and all mutations go through
//! [`Storefront::on_event`], which serialises them: rapid repeated events
//! (a double-tapped "add", say) land as two well-ordered operations and
//! can never corrupt the cart invariants. Reads are pure.

use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};

use crate::{
    cart::CartLedger,
    filters::{self, Filter},
    pricing::PricingError,
    products::Product,
};

/// UI events, each mapping to exactly one state operation.
#[derive(Debug, Clone)]
pub enum StorefrontEvent {
    /// Add one unit of a product to the cart.
    AddToCart(Product),

    /// Remove one unit of a product from the cart.
    SubtractFromCart(Product),

    /// Drop a product's line entirely. The UI asks for confirmation
    /// before sending this; the store applies it unconditionally.
    RemoveFromCart(Product),

    /// Conclude a purchase of the selected products, removing their
    /// lines from the cart.
    Purchase(FxHashSet<Product>),

    /// Toggle the filter at the given position.
    ToggleFilter(usize),

    /// Deactivate every filter.
    ClearFilters,

    /// Replace the search query.
    SetQuery(String),
}

/// Session state: the catalog, the browse filters, the search query and
/// the cart.
#[derive(Debug)]
pub struct Storefront {
    products: Vec<Product>,
    filters: Vec<Filter<Product>>,
    query: String,
    cart: CartLedger,
}

impl Storefront {
    /// Open a storefront over a catalog, with the built-in discount
    /// filters. An empty catalog is fine: the store works, the cart just
    /// has nothing to sell.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_filters(products, filters::discount_filters())
    }

    /// Open a storefront with a custom filter set.
    #[must_use]
    pub fn with_filters(products: Vec<Product>, filters: Vec<Filter<Product>>) -> Self {
        Self {
            products,
            filters,
            query: String::new(),
            cart: CartLedger::new(),
        }
    }

    /// Apply one event.
    pub fn on_event(&mut self, event: StorefrontEvent) {
        match event {
            StorefrontEvent::AddToCart(product) => self.cart.add_one(product),
            StorefrontEvent::SubtractFromCart(product) => self.cart.subtract_one(&product),
            StorefrontEvent::RemoveFromCart(product) => self.cart.remove_product(&product),
            StorefrontEvent::Purchase(selected) => self.cart.purchase(&selected),
            StorefrontEvent::ToggleFilter(index) => {
                if let Some(filter) = self.filters.get_mut(index) {
                    filter.toggle();
                }
            }
            StorefrontEvent::ClearFilters => {
                for filter in &mut self.filters {
                    filter.set_selected(false);
                }
            }
            StorefrontEvent::SetQuery(query) => self.query = query,
        }
    }

    /// The full catalog.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The catalog as narrowed by the query and active filters.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        filters::visible_products(&self.products, &self.filters, &self.query)
    }

    /// The browse filters, in display order.
    #[must_use]
    pub fn filters(&self) -> &[Filter<Product>] {
        &self.filters
    }

    /// The current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The cart read model.
    #[must_use]
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Distinct cart lines, for the cart badge.
    #[must_use]
    pub fn cart_line_count(&self) -> usize {
        self.cart.len()
    }

    /// Total price of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if an amount cannot be settled to minor
    /// units or the cart lines mix currencies.
    pub fn cart_subtotal(&self) -> Result<Money<'static, Currency>, PricingError> {
        self.cart.subtotal()
    }
}
