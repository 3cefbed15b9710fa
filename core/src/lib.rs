// src/lib.rs

//! Data access layer for the Products API.
//!
//! A single entity, [`Product`], and the [`ProductStore`] trait that wraps the
//! five CRUD operations against the `products` table:
//!  - `get_all` lists every row.
//!  - `get_by_id` looks up one row and reports a missing row as [`StoreError::NotFound`].
//!  - `add` inserts and returns the row with its store-assigned id.
//!  - `update` overwrites a row by id, last writer wins.
//!  - `delete` removes a row and tolerates absent ids.
//!
//! Two implementations ship with the crate: [`PgProductStore`] on PostgreSQL
//! via `sqlx`, and [`InMemoryProductStore`] for tests and database-less runs.

pub mod error;
pub mod product;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{StoreError, StoreResult};
pub use crate::product::Product;
pub use crate::store::{InMemoryProductStore, PgProductStore, ProductStore};
