// api/src/errors.rs

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use products_core::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Missing query parameter, non-positive id, missing body.
  #[error("{0}")]
  Validation(String),

  /// Raised while loading configuration at startup; never reaches a client.
  #[error("Configuration Error: {0}")]
  Config(String),

  /// Not-found and infrastructure failures from the data access layer.
  #[error(transparent)]
  Store(#[from] StoreError),
}

// Every failure kind is answered with 400 and the error text. Not-found and
// store failures included.
impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    StatusCode::BAD_REQUEST
  }

  // Handlers and extractors log the failure where it happens; this only renders it.
  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code())
      .content_type(ContentType::plaintext())
      .body(self.to_string())
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
