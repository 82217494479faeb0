//! Fixtures
//!
//! The bundled demo catalog and its rule set, used by the examples and
//! the integration tests: a two-for-one voucher, a t-shirt with a bulk
//! "1 off per unit from 3 units" rule, and an undiscounted mug.

use rust_decimal::Decimal;

use crate::{
    catalog::{self, CatalogError, CatalogRules},
    discounts::{BulkPricer, DiscountPolicy},
    products::Product,
};

/// The bundled catalog document.
pub const CATALOG_JSON: &str = r#"{
  "products": [
    { "code": "VOUCHER", "name": "Gift Voucher", "price": 5 },
    { "code": "TSHIRT", "name": "Branded T-Shirt", "price": 20.0 },
    { "code": "MUG", "name": "Coffee Mug", "price": 7.5 }
  ]
}"#;

/// The rule set for the bundled catalog.
#[must_use]
pub fn catalog_rules() -> CatalogRules {
    let mut rules = CatalogRules::new();

    rules
        .assign_policy("VOUCHER", DiscountPolicy::TwoForOne)
        .assign_policy(
            "TSHIRT",
            DiscountPolicy::bulk(BulkPricer::amount_off(Decimal::ONE)),
        )
        .assign_image_urls(
            "TSHIRT",
            vec![
                "https://static.vecteezy.com/system/resources/previews/012/628/161/non_2x/isolated-regular-plain-black-back-t-shirt-free-png.png".to_string(),
                "https://i.pinimg.com/originals/bd/ef/cb/bdefcbc72735f64db17f3250b1e64245.png".to_string(),
            ],
        )
        .assign_image_urls(
            "MUG",
            vec![
                "https://www.pngall.com/wp-content/uploads/2/Mug-PNG-Pic.png".to_string(),
                "https://www.pngall.com/wp-content/uploads/2/Mug.png".to_string(),
            ],
        )
        .assign_image_urls(
            "VOUCHER",
            vec![
                "https://www.greenback.com/assets/f/blogs/how-to-configure-quickbooks-online-for-gift-cards/hdr.png".to_string(),
            ],
        );

    rules
}

/// Parse the bundled catalog into domain products.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the bundled document fails to parse,
/// which would mean the fixture itself is broken.
pub fn products() -> Result<Vec<Product>, CatalogError> {
    catalog::parse_products(CATALOG_JSON, &catalog_rules())
}
