// products_core/src/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalogue product, one row of the `products` table.
///
/// `id` is assigned by the store on insert; any value `<= 0` means the product
/// has not been persisted. Input accepts both camelCase and PascalCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  #[serde(default, alias = "Id")]
  pub id: i32,
  #[serde(alias = "Name")]
  pub name: String,
  #[serde(default, alias = "Description")]
  pub description: Option<String>,
  #[serde(default, alias = "PriceCents")]
  pub price_cents: i32,
  #[serde(default, alias = "StockQuantity")]
  pub stock_quantity: i32,
}

impl Product {
  /// A product that has not been inserted yet.
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  pub fn is_persisted(&self) -> bool {
    self.id > 0
  }
}
