use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use tokio::task::JoinError;

use crate::error::{ErrorReport, PredictErr};

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    Predict(PredictErr),
    /// The request body is not JSON of the expected shape.
    Body(JsonRejection),
    /// A blocking prediction task panicked or was cancelled.
    Task(JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Predict(PredictErr::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Predict(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Predict(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn report(&self) -> ErrorReport {
        match self {
            ApiError::Predict(e) => ErrorReport::from(e),
            ApiError::Body(rejection) => ErrorReport {
                kind: "invalid_record",
                detail: rejection.body_text(),
                field: None,
            },
            ApiError::Task(_) => ErrorReport {
                kind: "internal",
                detail: "the prediction task did not complete".to_string(),
                field: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Predict(e) if status.is_server_error() => error!("request failed: {e}"),
            ApiError::Task(e) => error!("prediction task failed: {e}"),
            ApiError::Predict(e) => warn!(kind = e.kind(); "request rejected: {e}"),
            ApiError::Body(rejection) => warn!("request rejected: {rejection}"),
        }

        (status, Json(self.report())).into_response()
    }
}

impl From<PredictErr> for ApiError {
    fn from(value: PredictErr) -> Self {
        Self::Predict(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Body(value)
    }
}

impl From<JoinError> for ApiError {
    fn from(value: JoinError) -> Self {
        Self::Task(value)
    }
}
