//! Products

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use rusty_money::iso::{self, Currency};

use crate::discounts::DiscountPolicy;

/// Currency assumed when a product does not specify one.
pub const DEFAULT_CURRENCY: &Currency = iso::EUR;

/// An immutable catalog entry.
///
/// Products are compared and hashed structurally over every field, so the
/// same catalog entry is the same cart key wherever it is cloned to.
#[derive(Clone, Debug)]
pub struct Product {
    code: String,
    name: String,
    unit_price: Decimal,
    image_urls: Vec<String>,
    discount: DiscountPolicy,
    currency: &'static Currency,
}

impl Product {
    /// Create a product priced in the default currency, with no images.
    ///
    /// Negative unit prices are clamped to zero.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        discount: DiscountPolicy,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            unit_price: unit_price.max(Decimal::ZERO),
            image_urls: Vec::new(),
            discount,
            currency: DEFAULT_CURRENCY,
        }
    }

    /// Attach image URLs.
    #[must_use]
    pub fn with_image_urls(mut self, image_urls: impl Into<Vec<String>>) -> Self {
        self.image_urls = image_urls.into();
        self
    }

    /// Price the product in a different currency.
    #[must_use]
    pub fn with_currency(mut self, currency: &'static Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Catalog identifier.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base price per unit, before any discount.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Image URLs, in display order. May be empty.
    #[must_use]
    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    /// The discount policy attached to this product.
    #[must_use]
    pub fn discount(&self) -> &DiscountPolicy {
        &self.discount
    }

    /// The currency this product is priced in.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Effective price per unit when buying `quantity` units.
    #[must_use]
    pub fn effective_unit_price(&self, quantity: u32) -> Decimal {
        self.discount.effective_unit_price(quantity, self.unit_price)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.name == other.name
            && self.unit_price == other.unit_price
            && self.image_urls == other.image_urls
            && self.discount == other.discount
            && self.currency.iso_alpha_code == other.currency.iso_alpha_code
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.name.hash(state);
        self.unit_price.hash(state);
        self.image_urls.hash(state);
        self.discount.hash(state);
        self.currency.iso_alpha_code.hash(state);
    }
}
