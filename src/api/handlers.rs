use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use tokio::task;

use super::ApiError;
use crate::{
    record::HouseRecord,
    service::{BatchReport, ModelInfo, ModelState, Prediction},
};

type ApiResult<T> = Result<T, ApiError>;

pub const ENDPOINTS: [&str; 7] = [
    "/",
    "/health",
    "/model-info",
    "/categorical-values",
    "/predict",
    "/predict-batch",
    "/sample-data",
];

#[derive(Debug, Serialize)]
pub struct Index {
    message: &'static str,
    version: &'static str,
    endpoints: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    status: &'static str,
    model_loaded: bool,
    timestamp: DateTime<Local>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    sample_house_1: HouseRecord,
    sample_house_2: HouseRecord,
}

pub async fn index() -> Json<Index> {
    Json(Index {
        message: "House price prediction API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: &ENDPOINTS,
    })
}

pub async fn health(State(state): State<Arc<ModelState>>) -> (StatusCode, Json<Health>) {
    let model_loaded = state.is_loaded();
    let (status, code) = if model_loaded {
        ("healthy", StatusCode::OK)
    } else {
        ("unavailable", StatusCode::SERVICE_UNAVAILABLE)
    };

    let health = Health {
        status,
        model_loaded,
        timestamp: Local::now(),
    };

    (code, Json(health))
}

pub async fn model_info(State(state): State<Arc<ModelState>>) -> ApiResult<Json<ModelInfo>> {
    let service = state.current()?;
    Ok(Json(service.model_info()))
}

pub async fn categorical_values(State(state): State<Arc<ModelState>>) -> ApiResult<Response> {
    let service = state.current()?;
    Ok(Json(service.bundle().known_values()).into_response())
}

pub async fn predict(
    State(state): State<Arc<ModelState>>,
    payload: Result<Json<HouseRecord>, JsonRejection>,
) -> ApiResult<Json<Prediction>> {
    let service = state.current()?;
    let Json(record) = payload?;

    Ok(Json(service.predict(&record)?))
}

pub async fn predict_batch(
    State(state): State<Arc<ModelState>>,
    payload: Result<Json<Vec<Value>>, JsonRejection>,
) -> ApiResult<Json<BatchReport>> {
    let service = state.current()?;
    let Json(inputs) = payload?;

    let report = task::spawn_blocking(move || service.predict_batch(inputs)).await??;
    Ok(Json(report))
}

pub async fn sample_data() -> Json<SampleData> {
    Json(SampleData {
        sample_house_1: HouseRecord::sample_apartment(),
        sample_house_2: HouseRecord::sample_villa(),
    })
}
