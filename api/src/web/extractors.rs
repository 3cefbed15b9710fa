// api/src/web/extractors.rs

//! Request extractors for the product endpoints.

use actix_web::dev::Payload;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::error;

use crate::errors::AppError;
use crate::messages;
use crate::web::filters::query_value;
use products_core::Product;

// --- Query: `id` ---

/// The `id` query parameter, key matched ignoring case, first occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductIdQuery {
  pub id: i32,
}

impl ProductIdQuery {
  fn parse(query_string: &str) -> Result<Self, AppError> {
    let raw = query_value(query_string, "id")
      .ok_or_else(|| AppError::Validation(messages::required_query_parameter("id")))?;
    raw
      .trim()
      .parse::<i32>()
      .map(|id| Self { id })
      .map_err(|e| AppError::Validation(format!("The value '{}' is not valid for id: {}", raw, e)))
  }
}

impl FromRequest for ProductIdQuery {
  type Error = AppError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let result = Self::parse(req.query_string());
    if let Err(e) = &result {
      error!(path = %req.path(), "Failed to read product id: {}", e);
    }
    ready(result)
  }
}

// --- Body: Product ---

/// A JSON product body. `None` when the body is empty or the literal `null`.
///
/// Anything else must be `application/json` (or `+json`) holding a valid
/// product; otherwise extraction fails with the parser's message.
#[derive(Debug)]
pub struct ProductPayload(pub Option<Product>);

impl ProductPayload {
  fn parse(content_type: &str, body: &[u8]) -> Result<Self, AppError> {
    let text = std::str::from_utf8(body)
      .map_err(|e| AppError::Validation(format!("Request body is not valid UTF-8: {}", e)))?
      .trim();
    if text.is_empty() || text == "null" {
      return Ok(Self(None));
    }
    if content_type != "application/json" && !content_type.ends_with("+json") {
      return Err(AppError::Validation(format!(
        "Unsupported content type '{}'; expected application/json.",
        content_type
      )));
    }
    serde_json::from_str::<Product>(text)
      .map(|product| Self(Some(product)))
      .map_err(|e| AppError::Validation(format!("Json deserialize error: {}", e)))
  }
}

impl FromRequest for ProductPayload {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
    let content_type = req.content_type().to_ascii_lowercase();
    let path = req.path().to_string();
    let body = Bytes::from_request(req, payload);

    Box::pin(async move {
      let bytes = body.await.map_err(|e| {
        error!(%path, "Failed to read request body: {}", e);
        AppError::Validation(e.to_string())
      })?;
      Self::parse(&content_type, &bytes).map_err(|e| {
        error!(%path, "Rejected product body: {}", e);
        e
      })
    })
  }
}
