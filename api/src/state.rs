// api/src/state.rs
use crate::config::AppConfig;
use products_core::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}
