//! Catalog
//!
//! Parses the bundled catalog document and builds domain products from it.
//! The document carries only codes, names and prices; discount policies
//! and image URLs are assigned per product code by [`CatalogRules`] while
//! the products are built, so the pricing engine itself never looks
//! anything up by code.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    discounts::DiscountPolicy,
    products::{DEFAULT_CURRENCY, Product},
};

/// Errors raised while loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document could not be parsed.
    #[error("failed to parse catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level shape of the catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<ProductRecord>,
}

/// One raw product entry in the catalog document.
#[derive(Debug, Deserialize)]
pub struct ProductRecord {
    /// Catalog identifier.
    pub code: String,

    /// Display name.
    pub name: String,

    /// Base price per unit.
    pub price: Decimal,
}

/// Per-code assignments applied while building domain products.
#[derive(Debug, Clone)]
pub struct CatalogRules {
    policies: FxHashMap<String, DiscountPolicy>,
    image_urls: FxHashMap<String, Vec<String>>,
    currency: &'static Currency,
}

impl CatalogRules {
    /// Rules with no assignments, pricing in the default currency.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policies: FxHashMap::default(),
            image_urls: FxHashMap::default(),
            currency: DEFAULT_CURRENCY,
        }
    }

    /// Rules pricing the catalog in a different currency.
    #[must_use]
    pub fn with_currency(currency: &'static Currency) -> Self {
        Self {
            currency,
            ..Self::new()
        }
    }

    /// Attach a discount policy to a product code. Codes without an
    /// assignment get no discount.
    pub fn assign_policy(&mut self, code: impl Into<String>, policy: DiscountPolicy) -> &mut Self {
        self.policies.insert(code.into(), policy);
        self
    }

    /// Attach image URLs to a product code. Codes without an assignment
    /// get none.
    pub fn assign_image_urls(
        &mut self,
        code: impl Into<String>,
        image_urls: impl Into<Vec<String>>,
    ) -> &mut Self {
        self.image_urls.insert(code.into(), image_urls.into());
        self
    }

    fn policy_for(&self, code: &str) -> DiscountPolicy {
        self.policies
            .get(code)
            .cloned()
            .unwrap_or(DiscountPolicy::None)
    }

    fn image_urls_for(&self, code: &str) -> Vec<String> {
        self.image_urls.get(code).cloned().unwrap_or_default()
    }
}

impl Default for CatalogRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a catalog document and build its products in document order.
///
/// A document with an empty product list is valid and yields an empty
/// catalog.
///
/// # Errors
///
/// - [`CatalogError::Json`]: the document is not valid JSON or does not
///   match the catalog shape.
pub fn parse_products(json: &str, rules: &CatalogRules) -> Result<Vec<Product>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;

    let products = document
        .products
        .into_iter()
        .map(|record| {
            let policy = rules.policy_for(&record.code);
            let image_urls = rules.image_urls_for(&record.code);

            Product::new(record.code, record.name, record.price, policy)
                .with_image_urls(image_urls)
                .with_currency(rules.currency)
        })
        .collect();

    Ok(products)
}
