//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartLedger, CartSnapshot},
    catalog::{CatalogError, CatalogRules, ProductRecord, parse_products},
    discounts::{BulkPricer, DEFAULT_BULK_THRESHOLD, DiscountPolicy},
    filters::{Filter, QUERY_MIN_LENGTH_TO_SEARCH, discount_filters, matches_query},
    pricing::{PricingError, line_total, subtotal},
    products::{DEFAULT_CURRENCY, Product},
    selection::{CartLine, PurchaseSelection},
    store::{Storefront, StorefrontEvent},
};
