//! The HTTP surface of the prediction service.

mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

pub use error::ApiError;
pub use handlers::ENDPOINTS;

use crate::service::ModelState;

/// Builds the router serving every endpoint over `state`.
pub fn router(state: Arc<ModelState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/model-info", get(handlers::model_info))
        .route("/categorical-values", get(handlers::categorical_values))
        .route("/predict", post(handlers::predict))
        .route("/predict-batch", post(handlers::predict_batch))
        .route("/sample-data", get(handlers::sample_data))
        .with_state(state)
}
