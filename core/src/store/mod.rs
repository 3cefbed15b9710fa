// products_core/src/store/mod.rs

//! The data access layer: every read and write of Product rows goes through a
//! [`ProductStore`].

pub mod memory;
pub mod postgres;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::product::Product;

/// CRUD access to the `products` table.
///
/// Each write is its own atomic unit against the backing store. There is no
/// optimistic concurrency check: the last `update` wins.
#[async_trait]
pub trait ProductStore: Send + Sync {
  /// Every product, ordered by id.
  async fn get_all(&self) -> StoreResult<Vec<Product>>;

  /// Looks up one product. A missing row is `StoreError::NotFound`, any other
  /// failure is `StoreError::Retrieval` carrying the cause.
  async fn get_by_id(&self, id: i32) -> StoreResult<Product>;

  /// Inserts `product` and returns it with the store-assigned id. The incoming
  /// id is ignored.
  async fn add(&self, product: Product) -> StoreResult<Product>;

  /// Overwrites the row keyed by `product.id`. A missing row is
  /// `StoreError::NotFound`.
  async fn update(&self, product: Product) -> StoreResult<Product>;

  /// Removes the row if it exists. Deleting an absent id is not an error.
  async fn delete(&self, id: i32) -> StoreResult<()>;
}
