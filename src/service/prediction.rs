use chrono::{DateTime, Local};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::format_price;
use crate::{
    artifacts::ArtifactBundle,
    encoding::FeatureVectorAssembler,
    error::{PredictErr, Result},
    record::{CategoricalField, HouseRecord},
    validation::ValidationGate,
};

/// How many cities `/model-info` lists.
pub const SUPPORTED_CITIES_LEN: usize = 20;

/// A successful price prediction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub predicted_price: f64,
    pub predicted_price_formatted: String,
    pub metadata: PredictionMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionMetadata {
    pub algorithm_type: String,
    pub feature_count: usize,
    pub prediction_timestamp: DateTime<Local>,
}

/// The model description served by `/model-info`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub algorithm_type: String,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
    pub supported_cities: Vec<String>,
    pub supported_house_types: Vec<String>,
}

/// Runs the validate, encode, estimate and format pipeline over a loaded bundle.
pub struct PredictionService {
    bundle: ArtifactBundle,
}

impl PredictionService {
    /// Creates a new `PredictionService` owning `bundle`.
    pub fn new(bundle: ArtifactBundle) -> Self {
        Self { bundle }
    }

    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }

    /// Predicts the price of a single house.
    ///
    /// # Arguments
    /// * `record` - The house to price.
    ///
    /// # Returns
    /// The prediction, or the first `PredictErr` raised along the pipeline.
    /// The estimator is only reached once the record passed validation and encoding.
    pub fn predict(&self, record: &HouseRecord) -> Result<Prediction> {
        let record = ValidationGate::new(self.bundle.known_values()).validate(record)?;
        let vector = FeatureVectorAssembler::new(self.bundle.schema(), self.bundle.codebook())
            .assemble(record)?;

        let predictor = self.bundle.predictor();
        let price = predictor.predict(&vector).map_err(|e| {
            error!(algorithm = predictor.algorithm(); "estimator failed: {e}");
            PredictErr::Estimator(e)
        })?;

        debug!(city = record.city.as_str(), price = price; "prediction done");

        Ok(Prediction {
            predicted_price: price,
            predicted_price_formatted: format_price(price),
            metadata: PredictionMetadata {
                algorithm_type: predictor.algorithm().to_string(),
                feature_count: vector.len(),
                prediction_timestamp: Local::now(),
            },
        })
    }

    /// Reads a record out of untyped JSON and predicts it.
    ///
    /// # Errors
    /// `InvalidRecord` if `value` is not a well formed house record.
    pub fn predict_value(&self, value: &Value) -> Result<Prediction> {
        let record = HouseRecord::deserialize(value).map_err(|e| PredictErr::InvalidRecord {
            reason: e.to_string(),
        })?;

        self.predict(&record)
    }

    /// Describes the loaded model, listing at most `SUPPORTED_CITIES_LEN` cities.
    pub fn model_info(&self) -> ModelInfo {
        let known = self.bundle.known_values();
        let cities = known.values(CategoricalField::City);

        ModelInfo {
            algorithm_type: self.bundle.predictor().algorithm().to_string(),
            feature_count: self.bundle.schema().len(),
            feature_names: self.bundle.schema().names().to_vec(),
            supported_cities: cities.iter().take(SUPPORTED_CITIES_LEN).cloned().collect(),
            supported_house_types: known.values(CategoricalField::HouseType).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::{
        codebook::{CategoricalCodebook, KnownValues},
        encoding::{FeatureSchema, GROUND_FLOOR},
        estimator::LinearRegressor,
    };

    fn service() -> PredictionService {
        let sample = HouseRecord::sample_apartment();
        let villa = HouseRecord::sample_villa();

        let vocabularies: HashMap<String, Vec<String>> = CategoricalField::ALL
            .iter()
            .map(|&f| {
                let mut labels = vec![sample.label(f).to_string(), villa.label(f).to_string()];
                labels.sort();
                labels.dedup();
                (f.name().to_string(), labels)
            })
            .collect();

        let mut known = vocabularies.clone();
        known.insert(
            "floor".into(),
            vec![sample.floor.clone(), GROUND_FLOOR.to_string()],
        );

        let schema = FeatureSchema::new(vec!["netArea".into(), "floor".into()]).unwrap();
        let predictor = Box::new(LinearRegressor::new(1000.0, vec![20_000.0, 1000.0]).unwrap());
        let bundle = ArtifactBundle::new(
            predictor,
            CategoricalCodebook::new(vocabularies).unwrap(),
            schema,
            KnownValues::new(known).unwrap(),
        )
        .unwrap();

        PredictionService::new(bundle)
    }

    #[test]
    fn predicts_the_sample_apartment() {
        let prediction = service().predict(&HouseRecord::sample_apartment()).unwrap();

        // 1000 + 120 * 20000 + 5 * 1000
        assert_eq!(prediction.predicted_price, 2_406_000.0);
        assert_eq!(prediction.predicted_price_formatted, "2,406,000 TL");
        assert_eq!(prediction.metadata.algorithm_type, "Linear Regression");
        assert_eq!(prediction.metadata.feature_count, 2);
    }

    #[test]
    fn ground_floor_encodes_to_zero() {
        let prediction = service().predict(&HouseRecord::sample_villa()).unwrap();
        assert_eq!(prediction.predicted_price, 1000.0 + 200.0 * 20_000.0);
    }

    #[test]
    fn unknown_city_is_rejected() {
        let mut record = HouseRecord::sample_apartment();
        record.city = "GeçersizŞehir".into();

        let err = service().predict(&record).unwrap_err();
        assert_eq!(err.kind(), "unknown_category");
        assert_eq!(err.field(), Some("city"));
    }

    #[test]
    fn malformed_json_is_an_invalid_record() {
        let err = service()
            .predict_value(&json!({ "city": "İstanbul" }))
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_record");
    }

    #[test]
    fn model_info_lists_the_schema() {
        let info = service().model_info();
        assert_eq!(info.feature_names, vec!["netArea", "floor"]);
        assert_eq!(info.feature_count, 2);
        assert_eq!(info.supported_cities, vec!["Ankara", "İstanbul"]);
        assert_eq!(info.supported_house_types, vec!["Daire", "Villa"]);
    }
}
