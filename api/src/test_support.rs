// api/src/test_support.rs

//! Store doubles and state builders shared by the handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use products_core::{InMemoryProductStore, Product, ProductStore, StoreError, StoreResult};

use crate::config::{AppConfig, LogFormat, StoreBackend};
use crate::state::AppState;

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    store_backend: StoreBackend::Memory,
    database_url: None,
    db_max_connections: 1,
    log_format: LogFormat::Pretty,
  }
}

pub fn test_state(store: Arc<dyn ProductStore>) -> AppState {
  AppState {
    store,
    config: Arc::new(test_config()),
  }
}

/// In-memory store that records how many operations reached it.
#[derive(Debug, Default)]
pub struct CountingStore {
  inner: InMemoryProductStore,
  calls: AtomicUsize,
}

impl CountingStore {
  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  fn hit(&self) {
    self.calls.fetch_add(1, Ordering::SeqCst);
  }
}

#[async_trait]
impl ProductStore for CountingStore {
  async fn get_all(&self) -> StoreResult<Vec<Product>> {
    self.hit();
    self.inner.get_all().await
  }

  async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
    self.hit();
    self.inner.get_by_id(id).await
  }

  async fn add(&self, product: Product) -> StoreResult<Product> {
    self.hit();
    self.inner.add(product).await
  }

  async fn update(&self, product: Product) -> StoreResult<Product> {
    self.hit();
    self.inner.update(product).await
  }

  async fn delete(&self, id: i32) -> StoreResult<()> {
    self.hit();
    self.inner.delete(id).await
  }
}

/// Store whose every operation fails as if the connection pool were exhausted.
#[derive(Debug, Default)]
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
  async fn get_all(&self) -> StoreResult<Vec<Product>> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }

  async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
    Err(StoreError::Retrieval {
      id,
      source: sqlx::Error::PoolTimedOut,
    })
  }

  async fn add(&self, _product: Product) -> StoreResult<Product> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }

  async fn update(&self, _product: Product) -> StoreResult<Product> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }

  async fn delete(&self, _id: i32) -> StoreResult<()> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
  }
}
