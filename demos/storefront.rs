//! Storefront Example
//!
//! Walks the bundled catalog through a full session: browse, fill the
//! cart, deselect a line on the purchase screen, buy the rest, and show
//! what stays in the cart.

use anyhow::Result;

use till::{
    fixtures,
    prelude::{CartLine, PurchaseSelection, Storefront, StorefrontEvent},
    pricing,
};

/// Storefront Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let mut store = Storefront::new(fixtures::products()?);

    println!("Catalog:");
    for product in store.products() {
        println!(
            "  {} - {} ({})",
            product.code(),
            pricing::line_total(product, 1)?,
            product.discount().label()
        );
    }

    let products: Vec<_> = store.products().to_vec();

    // 3 vouchers, 3 shirts, 1 mug.
    for product in &products {
        let quantity = if product.code() == "MUG" { 1 } else { 3 };

        for _ in 0..quantity {
            store.on_event(StorefrontEvent::AddToCart(product.clone()));
        }
    }

    println!("\nCart ({} lines):", store.cart_line_count());
    for (product, quantity) in store.cart().iter() {
        println!(
            "  {quantity} x {} = {}",
            product.name(),
            store.cart().line_total(product, quantity)?
        );
    }
    println!("Subtotal: {}", store.cart_subtotal()?);

    // The purchase screen: everything selected, then the mug left behind.
    let mut selection = PurchaseSelection::new();
    selection.sync(store.cart());

    if let Some(mug) = products.iter().find(|product| product.code() == "MUG") {
        selection.set_selected(&CartLine::new(mug.clone(), 1), false);
    }

    println!("\nBuying {} selected lines", selection.selected_lines().count());
    println!("Purchase total: {}", selection.selected_subtotal()?);

    store.on_event(StorefrontEvent::Purchase(selection.selected_products()));

    println!("\nLeft in cart after purchase:");
    for (product, quantity) in store.cart().iter() {
        println!("  {quantity} x {}", product.name());
    }

    Ok(())
}
