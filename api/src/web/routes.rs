// api/src/web/routes.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;
use crate::web::filters::RequireQueryParameter;
use crate::web::handlers::product_handlers;

// Liveness only; does not touch the store.
async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "status": "ok",
      "store": app_state.config.store_backend.to_string(),
  }))
}

// This function will be called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/Products")
        .route(
          "/GetAllProducts",
          web::get().to(product_handlers::get_all_products_handler),
        )
        .service(
          web::resource("/GetProductsByid")
            .wrap(RequireQueryParameter::new("id"))
            .route(web::get().to(product_handlers::get_product_by_id_handler)),
        )
        .route(
          "/InsertProducts",
          web::post().to(product_handlers::insert_product_handler),
        )
        .route(
          "/UpdateProducts",
          web::put().to(product_handlers::update_product_handler),
        )
        .service(
          web::resource("/DeleteProducts")
            .wrap(RequireQueryParameter::new("id"))
            .route(web::delete().to(product_handlers::delete_product_handler)),
        ),
    );
}
