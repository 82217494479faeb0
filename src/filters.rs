//! Filters
//!
//! The browse-screen predicates: toggleable discount filters over the
//! catalog and the name search. Active filters widen each other (a
//! product passes if any active filter matches); the search query gates
//! the result.

use std::{fmt, sync::Arc};

use crate::products::Product;

/// Queries shorter than this match every product.
pub const QUERY_MIN_LENGTH_TO_SEARCH: usize = 3;

/// A named, toggleable predicate over catalog entries.
#[derive(Clone)]
pub struct Filter<T> {
    label: &'static str,
    is_selected: bool,
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Filter<T> {
    /// Create a deselected filter.
    pub fn new(label: &'static str, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label,
            is_selected: false,
            predicate: Arc::new(predicate),
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the filter is currently active.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Activate or deactivate the filter.
    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Flip the filter's active state.
    pub fn toggle(&mut self) {
        self.is_selected = !self.is_selected;
    }

    /// Apply the filter's predicate.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("label", &self.label)
            .field("is_selected", &self.is_selected)
            .finish_non_exhaustive()
    }
}

/// The storefront's built-in discount filters.
#[must_use]
pub fn discount_filters() -> Vec<Filter<Product>> {
    vec![
        Filter::new("2 for 1", |product: &Product| {
            product.discount().is_two_for_one()
        }),
        Filter::new("Bulk", |product: &Product| product.discount().is_bulk()),
    ]
}

/// Whether a product's name matches the search query. Queries below the
/// minimum search length match everything.
#[must_use]
pub fn matches_query(product: &Product, query: &str) -> bool {
    query.chars().count() < QUERY_MIN_LENGTH_TO_SEARCH
        || product
            .name()
            .to_lowercase()
            .contains(&query.to_lowercase())
}

/// The products that pass the query gate and, when any filter is active,
/// at least one active filter.
#[must_use]
pub fn visible_products<'a>(
    products: &'a [Product],
    filters: &[Filter<Product>],
    query: &str,
) -> Vec<&'a Product> {
    let active: Vec<&Filter<Product>> = filters.iter().filter(|f| f.is_selected()).collect();

    products
        .iter()
        .filter(|product| {
            matches_query(product, query)
                && (active.is_empty() || active.iter().any(|f| f.matches(product)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::discounts::{BulkPricer, DiscountPolicy};

    use super::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(
                "VOUCHER",
                "Gift Voucher",
                Decimal::from(5),
                DiscountPolicy::TwoForOne,
            ),
            Product::new(
                "TSHIRT",
                "T-Shirt",
                Decimal::from(20),
                DiscountPolicy::bulk(BulkPricer::amount_off(Decimal::ONE)),
            ),
            Product::new("MUG", "Coffee Mug", Decimal::new(750, 2), DiscountPolicy::None),
        ]
    }

    fn codes<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|product| product.code()).collect()
    }

    #[test]
    fn no_active_filters_and_a_short_query_show_everything() {
        let products = catalog();
        let filters = discount_filters();

        let visible = visible_products(&products, &filters, "mu");

        assert_eq!(codes(&visible), ["VOUCHER", "TSHIRT", "MUG"]);
    }

    #[test]
    fn query_narrows_by_name_case_insensitively() {
        let products = catalog();
        let filters = discount_filters();

        let visible = visible_products(&products, &filters, "mug");

        assert_eq!(codes(&visible), ["MUG"]);
    }

    #[test]
    fn an_active_filter_narrows_to_matching_discounts() {
        let products = catalog();
        let mut filters = discount_filters();

        if let Some(filter) = filters.first_mut() {
            filter.toggle();
        }

        let visible = visible_products(&products, &filters, "");

        assert_eq!(codes(&visible), ["VOUCHER"]);
    }

    #[test]
    fn two_active_filters_widen_each_other() {
        let products = catalog();
        let mut filters = discount_filters();

        for filter in &mut filters {
            filter.set_selected(true);
        }

        let visible = visible_products(&products, &filters, "");

        assert_eq!(codes(&visible), ["VOUCHER", "TSHIRT"]);
    }

    #[test]
    fn query_and_filters_compose() {
        let products = catalog();
        let mut filters = discount_filters();

        for filter in &mut filters {
            filter.set_selected(true);
        }

        let visible = visible_products(&products, &filters, "voucher");

        assert_eq!(codes(&visible), ["VOUCHER"]);
    }

    #[test]
    fn toggle_flips_selection() {
        let mut filter = Filter::new("2 for 1", |product: &Product| {
            product.discount().is_two_for_one()
        });

        assert!(!filter.is_selected());

        filter.toggle();
        assert!(filter.is_selected());

        filter.toggle();
        assert!(!filter.is_selected());
    }

    #[test]
    fn filter_debug_includes_label_and_state() {
        let filter = Filter::new("Bulk", |product: &Product| product.discount().is_bulk());
        let debug = format!("{filter:?}");

        assert!(debug.contains("Bulk"));
        assert!(debug.contains("is_selected"));
    }
}
