use std::{error::Error, fmt};

use serde::Serialize;

use crate::{
    codebook::preview,
    encoding::InvalidFloor,
    estimator::EstimatorErr,
    record::CategoricalField,
};

/// How many valid values an `UnknownCategory` error lists.
pub const PREVIEW_LEN: usize = 10;

/// The per-request result type of the prediction pipeline.
pub type Result<T> = std::result::Result<T, PredictErr>;

/// All errors a single prediction request can run into.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictErr {
    /// A categorical value outside the trained vocabulary.
    UnknownCategory {
        field: CategoricalField,
        value: String,
        valid: String,
    },
    /// A floor that is neither the ground-floor sentinel nor an integer.
    InvalidFloorValue { value: String },
    /// A numeric field that violates its constraints.
    InvalidField {
        field: &'static str,
        reason: String,
    },
    /// A record that could not be read at all, such as a batch item with a missing field.
    InvalidRecord { reason: String },
    /// The feature schema names a column the record cannot provide.
    MissingFeature { feature: String },
    BatchTooLarge { got: usize, max: usize },
    Estimator(EstimatorErr),
    /// No model is loaded.
    Unavailable,
}

impl PredictErr {
    /// Builds an `UnknownCategory` listing a preview of `valid_values`.
    pub fn unknown_category(field: CategoricalField, value: &str, valid_values: &[String]) -> Self {
        Self::UnknownCategory {
            field,
            value: value.to_string(),
            valid: preview(valid_values, PREVIEW_LEN),
        }
    }

    /// A stable, machine readable name of the error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownCategory { .. } => "unknown_category",
            Self::InvalidFloorValue { .. } => "invalid_floor_value",
            Self::InvalidField { .. } => "invalid_field",
            Self::InvalidRecord { .. } => "invalid_record",
            Self::MissingFeature { .. } => "missing_feature",
            Self::BatchTooLarge { .. } => "batch_too_large",
            Self::Estimator(_) => "estimator_failure",
            Self::Unavailable => "unavailable",
        }
    }

    /// The request field the error is about, if there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnknownCategory { field, .. } => Some(field.name()),
            Self::InvalidFloorValue { .. } => Some("floor"),
            Self::InvalidField { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the caller can fix the error by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory { .. }
                | Self::InvalidFloorValue { .. }
                | Self::InvalidField { .. }
                | Self::InvalidRecord { .. }
                | Self::BatchTooLarge { .. }
        )
    }
}

impl fmt::Display for PredictErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory {
                field,
                value,
                valid,
            } => write!(f, "invalid value for {field}: {value}. Valid values: {valid}"),
            Self::InvalidFloorValue { value } => write!(f, "invalid floor value: {value}"),
            Self::InvalidField { field, reason } => write!(f, "invalid value for {field}: {reason}"),
            Self::InvalidRecord { reason } => write!(f, "malformed house record: {reason}"),
            Self::MissingFeature { feature } => write!(f, "missing feature: {feature}"),
            Self::BatchTooLarge { got, max } => {
                write!(f, "at most {max} houses can be predicted at once, got {got}")
            }
            Self::Estimator(e) => write!(f, "prediction failed: {e}"),
            Self::Unavailable => f.write_str("the model is not loaded"),
        }
    }
}

impl Error for PredictErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Estimator(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvalidFloor> for PredictErr {
    fn from(value: InvalidFloor) -> Self {
        Self::InvalidFloorValue { value: value.0 }
    }
}

impl From<EstimatorErr> for PredictErr {
    fn from(value: EstimatorErr) -> Self {
        Self::Estimator(value)
    }
}

/// The client-facing description of a `PredictErr`.
///
/// Internal failures keep their detail out of the report, it only goes to the logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&PredictErr> for ErrorReport {
    fn from(value: &PredictErr) -> Self {
        let detail = match value {
            PredictErr::Estimator(_) => "the estimator failed to produce a prediction".to_string(),
            other => other.to_string(),
        };

        Self {
            kind: value.kind(),
            detail,
            field: value.field().map(str::to_string),
        }
    }
}
