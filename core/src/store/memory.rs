// products_core/src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

use super::ProductStore;
use crate::error::{StoreError, StoreResult};
use crate::product::Product;

#[derive(Debug, Default)]
struct Table {
  rows: BTreeMap<i32, Product>,
  last_id: i32,
}

/// [`ProductStore`] holding rows in process memory.
///
/// Ids start at 1 and are never reused, matching a `SERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
  table: RwLock<Table>,
}

impl InMemoryProductStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a store pre-populated with `products`, each given a fresh id.
  pub fn with_products(products: impl IntoIterator<Item = Product>) -> StoreResult<Self> {
    let store = Self::new();
    {
      let mut table = store.table.write();
      for product in products {
        Self::insert_row(&mut table, product)?;
      }
    }
    Ok(store)
  }

  pub fn len(&self) -> usize {
    self.table.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn insert_row(table: &mut Table, mut product: Product) -> StoreResult<Product> {
    let id = table
      .last_id
      .checked_add(1)
      .ok_or_else(|| StoreError::Internal("product id sequence exhausted".to_string()))?;
    table.last_id = id;
    product.id = id;
    table.rows.insert(id, product.clone());
    Ok(product)
  }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
  #[instrument(name = "memory_store::get_all", skip(self))]
  async fn get_all(&self) -> StoreResult<Vec<Product>> {
    Ok(self.table.read().rows.values().cloned().collect())
  }

  #[instrument(name = "memory_store::get_by_id", skip(self))]
  async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
    self.table.read().rows.get(&id).cloned().ok_or_else(|| {
      warn!("Product with Id {} not found.", id);
      StoreError::NotFound { id }
    })
  }

  #[instrument(name = "memory_store::add", skip(self, product), fields(name = %product.name))]
  async fn add(&self, product: Product) -> StoreResult<Product> {
    let created = Self::insert_row(&mut self.table.write(), product)?;
    debug!(id = created.id, "Inserted product.");
    Ok(created)
  }

  #[instrument(name = "memory_store::update", skip(self, product), fields(id = product.id))]
  async fn update(&self, product: Product) -> StoreResult<Product> {
    let mut table = self.table.write();
    match table.rows.get_mut(&product.id) {
      Some(row) => {
        *row = product.clone();
        Ok(product)
      }
      None => {
        warn!("Update matched no product with Id {}.", product.id);
        Err(StoreError::NotFound { id: product.id })
      }
    }
  }

  #[instrument(name = "memory_store::delete", skip(self))]
  async fn delete(&self, id: i32) -> StoreResult<()> {
    if self.table.write().rows.remove(&id).is_none() {
      debug!(id, "Delete of absent product ignored.");
    }
    Ok(())
  }
}
