// api/src/web/mod.rs

pub mod extractors;
pub mod filters;
pub mod handlers;
pub mod routes;

pub use routes::configure_app_routes;
