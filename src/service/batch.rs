use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;

use super::{Prediction, PredictionService};
use crate::error::{ErrorReport, PredictErr, Result};

/// The largest batch accepted by `predict_batch`.
pub const MAX_BATCH_SIZE: usize = 100;

/// The per-item outcomes of a batch, in input order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<BatchItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub index: usize,
    pub input: Value,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOutcome {
    Prediction(Prediction),
    Error(ErrorReport),
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BatchOutcome::Prediction(_))
    }
}

impl PredictionService {
    /// Predicts every house of `inputs` independently.
    ///
    /// A failing item never stops the others, its error is recorded in its slot.
    ///
    /// # Arguments
    /// * `inputs` - Raw house records, at most `MAX_BATCH_SIZE` of them.
    ///
    /// # Returns
    /// A report with one entry per input, in input order.
    ///
    /// # Errors
    /// `BatchTooLarge` if there are more than `MAX_BATCH_SIZE` inputs, before any item is processed.
    pub fn predict_batch(&self, inputs: Vec<Value>) -> Result<BatchReport> {
        if inputs.len() > MAX_BATCH_SIZE {
            return Err(PredictErr::BatchTooLarge {
                got: inputs.len(),
                max: MAX_BATCH_SIZE,
            });
        }

        let results: Vec<BatchItem> = inputs
            .into_par_iter()
            .enumerate()
            .map(|(index, input)| {
                let outcome = match self.predict_value(&input) {
                    Ok(prediction) => BatchOutcome::Prediction(prediction),
                    Err(e) => {
                        warn!(index = index, kind = e.kind(); "batch item failed: {e}");
                        BatchOutcome::Error(ErrorReport::from(&e))
                    }
                };

                BatchItem {
                    index,
                    input,
                    outcome,
                }
            })
            .collect();

        let success_count = results.iter().filter(|item| item.outcome.is_success()).count();
        let report = BatchReport {
            total_count: results.len(),
            success_count,
            failure_count: results.len() - success_count,
            results,
        };

        info!(
            "batch of {} done, {} succeeded",
            report.total_count, report.success_count
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::{
        artifacts::ArtifactBundle,
        codebook::{CategoricalCodebook, KnownValues},
        encoding::FeatureSchema,
        estimator::LinearRegressor,
        record::{CategoricalField, HouseRecord},
    };

    fn service() -> PredictionService {
        let sample = HouseRecord::sample_apartment();
        let vocabularies: HashMap<String, Vec<String>> = CategoricalField::ALL
            .iter()
            .map(|&f| (f.name().to_string(), vec![sample.label(f).to_string()]))
            .collect();

        let schema = FeatureSchema::new(vec!["netArea".into()]).unwrap();
        let predictor = Box::new(LinearRegressor::new(0.0, vec![10_000.0]).unwrap());
        let bundle = ArtifactBundle::new(
            predictor,
            CategoricalCodebook::new(vocabularies.clone()).unwrap(),
            schema,
            KnownValues::new(vocabularies).unwrap(),
        )
        .unwrap();

        PredictionService::new(bundle)
    }

    fn house(net_area: f64) -> Value {
        let mut record = HouseRecord::sample_apartment();
        record.net_area = net_area;
        serde_json::to_value(record).unwrap()
    }

    #[test]
    fn oversized_batch_is_rejected_whole() {
        let inputs = vec![house(100.0); MAX_BATCH_SIZE + 1];
        let err = service().predict_batch(inputs).unwrap_err();
        assert_eq!(
            err,
            PredictErr::BatchTooLarge {
                got: 101,
                max: MAX_BATCH_SIZE
            }
        );
    }

    #[test]
    fn full_batch_is_accepted() {
        let inputs = vec![house(100.0); MAX_BATCH_SIZE];
        let report = service().predict_batch(inputs).unwrap();
        assert_eq!(report.total_count, MAX_BATCH_SIZE);
        assert_eq!(report.success_count, MAX_BATCH_SIZE);
    }

    #[test]
    fn failures_stay_in_their_slot() {
        let mut unknown_city = house(90.0);
        unknown_city["city"] = json!("GeçersizŞehir");

        let inputs = vec![house(80.0), unknown_city, json!({ "city": 3 }), house(150.0)];
        let report = service().predict_batch(inputs).unwrap();

        assert_eq!(report.total_count, 4);
        assert_eq!(report.success_count, 2);
        assert_eq!(report.failure_count, 2);

        let indices: Vec<usize> = report.results.iter().map(|item| item.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);

        match &report.results[3].outcome {
            BatchOutcome::Prediction(p) => assert_eq!(p.predicted_price, 1_500_000.0),
            other => panic!("unexpected outcome: {other:?}"),
        }
        match &report.results[1].outcome {
            BatchOutcome::Error(e) => assert_eq!(e.field.as_deref(), Some("city")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        match &report.results[2].outcome {
            BatchOutcome::Error(e) => assert_eq!(e.kind, "invalid_record"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn items_serialize_with_either_prediction_or_error() {
        let report = service()
            .predict_batch(vec![house(100.0), json!({})])
            .unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["totalCount"], 2);
        assert!(value["results"][0]["prediction"]["predictedPrice"].is_number());
        assert!(value["results"][0].get("error").is_none());
        assert_eq!(value["results"][1]["error"]["kind"], "invalid_record");
        assert_eq!(value["results"][1]["input"], json!({}));
    }

    #[test]
    fn empty_batch_is_fine() {
        let report = service().predict_batch(Vec::new()).unwrap();
        assert_eq!(report.total_count, 0);
        assert!(report.results.is_empty());
    }
}
