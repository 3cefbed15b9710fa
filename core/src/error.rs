// products_core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Product with Id {id} not found.")]
  NotFound { id: i32 },

  /// A lookup by id failed for a reason other than the row being absent.
  #[error("An error occurred while retrieving the product.")]
  Retrieval {
    id: i32,
    #[source]
    source: sqlx::Error,
  },

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Internal store error: {0}")]
  Internal(String),
}

impl StoreError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, StoreError::NotFound { .. })
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn not_found_message_names_the_id() {
    let err = StoreError::NotFound { id: 42 };
    assert_eq!(err.to_string(), "Product with Id 42 not found.");
    assert!(err.is_not_found());
  }

  #[test]
  fn retrieval_keeps_the_cause() {
    let err = StoreError::Retrieval {
      id: 7,
      source: sqlx::Error::PoolTimedOut,
    };
    assert_eq!(err.to_string(), "An error occurred while retrieving the product.");
    let source = std::error::Error::source(&err).map(|s| s.to_string());
    assert_eq!(source, Some(sqlx::Error::PoolTimedOut.to_string()));
    assert!(!err.is_not_found());
  }
}
