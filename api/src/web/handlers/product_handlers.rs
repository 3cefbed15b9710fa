// api/src/web/handlers/product_handlers.rs

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use tracing::{error, info, instrument};

use crate::errors::AppError;
use crate::messages;
use crate::state::AppState;
use crate::web::extractors::{ProductIdQuery, ProductPayload};
use products_core::{Product, StoreError};

fn plain_ok(message: String) -> HttpResponse {
  HttpResponse::Ok().content_type(ContentType::plaintext()).body(message)
}

#[instrument(name = "handler::get_all_products", skip(app_state))]
pub async fn get_all_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  info!("Calling GetAllProducts");

  let products: Vec<Product> = app_state.store.get_all().await.map_err(|e| {
    error!("GetAllProducts failed: {}", e);
    AppError::Store(e)
  })?;

  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product_by_id", skip(app_state, query), fields(product_id = query.id))]
pub async fn get_product_by_id_handler(
  app_state: web::Data<AppState>,
  query: ProductIdQuery,
) -> Result<HttpResponse, AppError> {
  info!("Calling GetProductsByid");
  let id = query.id;
  if id <= 0 {
    error!("Rejected non-positive product id {}.", id);
    return Err(AppError::Validation(messages::ID_REQUIRED.to_string()));
  }

  match app_state.store.get_by_id(id).await {
    Ok(product) => {
      info!("Product {} fetched successfully.", id);
      Ok(HttpResponse::Ok().json(product))
    }
    Err(e) => {
      error!("GetProductsByid failed for {}: {}", id, e);
      Err(AppError::Store(e))
    }
  }
}

#[instrument(name = "handler::insert_product", skip(app_state, payload))]
pub async fn insert_product_handler(
  app_state: web::Data<AppState>,
  payload: ProductPayload,
) -> Result<HttpResponse, AppError> {
  info!("Calling InsertProducts");
  let ProductPayload(Some(product)) = payload else {
    error!("No products is there to insert");
    return Err(AppError::Validation(messages::NO_RECORDS_INSERT.to_string()));
  };

  let created = app_state.store.add(product).await.map_err(|e| {
    error!("InsertProducts failed: {}", e);
    AppError::Store(e)
  })?;

  if !created.is_persisted() {
    error!("Insert returned product without an id; nothing was inserted");
    return Err(AppError::Validation(messages::NO_RECORDS_INSERT.to_string()));
  }

  info!("Product name with {} was inserted successfully as Id {}", created.name, created.id);
  Ok(plain_ok(messages::saved(&created.name)))
}

#[instrument(name = "handler::update_product", skip(app_state, payload))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  payload: ProductPayload,
) -> Result<HttpResponse, AppError> {
  info!("Calling UpdateProducts");
  let no_records = || AppError::Validation(messages::NO_RECORDS_UPDATE.to_string());

  let ProductPayload(Some(product)) = payload else {
    error!("No products is there to update");
    return Err(no_records());
  };
  if !product.is_persisted() {
    error!("Rejected update for non-positive product id {}.", product.id);
    return Err(no_records());
  }

  let id = product.id;
  match app_state.store.update(product).await {
    Ok(updated) if updated.is_persisted() => {
      info!("Product Id with {} was updated successfully", updated.id);
      Ok(plain_ok(messages::saved(&updated.name)))
    }
    Ok(_) => {
      error!("Update of product {} returned no persisted row", id);
      Err(no_records())
    }
    Err(StoreError::NotFound { .. }) => {
      error!("No products is there to update for Id {}", id);
      Err(no_records())
    }
    Err(e) => {
      error!("UpdateProducts failed for {}: {}", id, e);
      Err(AppError::Store(e))
    }
  }
}

#[instrument(name = "handler::delete_product", skip(app_state, query), fields(product_id = query.id))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  query: ProductIdQuery,
) -> Result<HttpResponse, AppError> {
  info!("Calling DeleteProducts");
  let id = query.id;
  if id <= 0 {
    error!("Rejected non-positive product id {}.", id);
    return Err(AppError::Validation(messages::ID_REQUIRED.to_string()));
  }

  app_state.store.delete(id).await.map_err(|e| {
    error!("DeleteProducts failed for {}: {}", id, e);
    AppError::Store(e)
  })?;

  info!("Product Id with {} was deleted successfully", id);
  Ok(plain_ok(messages::DELETED.to_string()))
}
