//! Console walkthrough of a shopping session.
//!
//! Stands in for the presentation layer: browse the catalog, search,
//! then drive the cart through a subscribed renderer.
//!
//! Run with `cargo run -p emporium-store --example storefront`.

use emporium_commerce::prelude::*;
use emporium_store::{CartStore, CatalogStore, StoreError};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let catalog = CatalogStore::builtin()?;
    info!(products = catalog.len(), "catalog ready");

    println!("== Collections ==");
    for category in catalog.list_categories() {
        let count = catalog.list_products(Some(*category)).len();
        println!("  {category} ({count})");
    }

    println!("\n== Search: \"automatic\" by price ==");
    let results = catalog.search(
        &SearchQuery::new()
            .with_keyword("automatic")
            .with_sort(SortOption::PriceAsc),
    );
    for product in &results.products {
        println!("  {} - {}", product.name, product.price);
    }

    let cart = CartStore::default();
    cart.subscribe(|snapshot| {
        println!(
            "  [cart] {} item(s), subtotal {}",
            snapshot.total_items,
            snapshot.total_price.display()
        );
    });

    println!("\n== Shopping ==");
    let diver = catalog
        .get_product(&ProductId::new("chrono-006"))
        .expect("built-in product")
        .clone();
    let elegance = catalog
        .get_product(&ProductId::new("chrono-003"))
        .expect("built-in product")
        .clone();

    println!("add {}", diver.name);
    cart.add_item(diver)?;
    println!("add {}", elegance.name);
    cart.add_item(elegance.clone())?;
    println!("set {} quantity to 2", elegance.name);
    cart.update_quantity(&elegance.id, 2)?;

    let saved = cart.serialize()?;
    println!("\nsession blob: {} bytes", saved.len());

    println!("checkout, clearing cart");
    cart.clear()?;

    println!("restoring saved session");
    let snapshot = cart.restore(&saved)?;
    for line in &snapshot.lines {
        println!(
            "  {} x{} = {}",
            line.product.name,
            line.quantity,
            line.line_total().display()
        );
    }

    Ok(())
}
