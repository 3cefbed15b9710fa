// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use once_cell::sync::Lazy;
use products_core::{Product, ProductStore};
use tracing::Level;

// --- Fixtures ---
pub fn widget() -> Product {
  Product {
    id: 0,
    name: "Widget".to_string(),
    description: Some("A small widget".to_string()),
    price_cents: 499,
    stock_quantity: 10,
  }
}

pub fn gadget() -> Product {
  Product {
    id: 0,
    name: "Gadget".to_string(),
    description: None,
    price_cents: 1999,
    stock_quantity: 2,
  }
}

/// Inserts `products` in order and returns them with their assigned ids.
pub async fn insert_all<S: ProductStore + ?Sized>(store: &S, products: Vec<Product>) -> Vec<Product> {
  let mut created = Vec::with_capacity(products.len());
  for product in products {
    created.push(store.add(product).await.expect("insert should succeed"));
  }
  created
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
