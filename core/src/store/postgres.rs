// products_core/src/store/postgres.rs

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

use super::ProductStore;
use crate::error::{StoreError, StoreResult};
use crate::product::Product;

/// [`ProductStore`] backed by PostgreSQL through an `sqlx` pool.
///
/// Queries are built at runtime so the crate compiles without a live database.
#[derive(Clone, Debug)]
pub struct PgProductStore {
  pool: PgPool,
}

impl PgProductStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Opens a pool of at most `max_connections` against `database_url`.
  pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await
      .map_err(|e| {
        error!(error = %e, "Failed to connect to the database.");
        StoreError::Database(e)
      })?;
    info!(max_connections, "Connected to the products database.");
    Ok(Self::new(pool))
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }
}

#[async_trait]
impl ProductStore for PgProductStore {
  #[instrument(name = "pg_store::get_all", skip(self))]
  async fn get_all(&self) -> StoreResult<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(
      "SELECT id, name, description, price_cents, stock_quantity FROM products ORDER BY id ASC",
    )
    .fetch_all(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch products from database: {}", e);
      StoreError::Database(e)
    })?;

    debug!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "pg_store::get_by_id", skip(self))]
  async fn get_by_id(&self, id: i32) -> StoreResult<Product> {
    let product_opt: Option<Product> =
      sqlx::query_as("SELECT id, name, description, price_cents, stock_quantity FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
          warn!(error = %e, "An error occurred while retrieving product {}.", id);
          StoreError::Retrieval { id, source: e }
        })?;

    product_opt.ok_or_else(|| {
      warn!("Product with Id {} not found.", id);
      StoreError::NotFound { id }
    })
  }

  #[instrument(name = "pg_store::add", skip(self, product), fields(name = %product.name))]
  async fn add(&self, product: Product) -> StoreResult<Product> {
    let created: Product = sqlx::query_as(
      "INSERT INTO products (name, description, price_cents, stock_quantity) VALUES ($1, $2, $3, $4) \
       RETURNING id, name, description, price_cents, stock_quantity",
    )
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price_cents)
    .bind(product.stock_quantity)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to insert product '{}': {}", product.name, e);
      StoreError::Database(e)
    })?;

    debug!(id = created.id, "Inserted product.");
    Ok(created)
  }

  #[instrument(name = "pg_store::update", skip(self, product), fields(id = product.id))]
  async fn update(&self, product: Product) -> StoreResult<Product> {
    let updated: Option<Product> = sqlx::query_as(
      "UPDATE products SET name = $2, description = $3, price_cents = $4, stock_quantity = $5 WHERE id = $1 \
       RETURNING id, name, description, price_cents, stock_quantity",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price_cents)
    .bind(product.stock_quantity)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to update product {}: {}", product.id, e);
      StoreError::Database(e)
    })?;

    updated.ok_or_else(|| {
      warn!("Update matched no product with Id {}.", product.id);
      StoreError::NotFound { id: product.id }
    })
  }

  #[instrument(name = "pg_store::delete", skip(self))]
  async fn delete(&self, id: i32) -> StoreResult<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to delete product {}: {}", id, e);
        StoreError::Database(e)
      })?;

    debug!(rows_affected = result.rows_affected(), "Delete finished.");
    Ok(())
  }
}
