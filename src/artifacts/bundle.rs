use std::path::Path;

use log::{info, warn};

use super::{
    loader::{
        read_blob, RawVocabularies, CATEGORICAL_VALUES_FILE, ESTIMATOR_FILE, FEATURE_NAMES_FILE,
        LABEL_ENCODERS_FILE,
    },
    ArtifactErr, Result,
};
use crate::{
    codebook::{CategoricalCodebook, KnownValues},
    encoding::FeatureSchema,
    estimator::{EstimatorBuilder, EstimatorSpec, Predictor},
    record::{CategoricalField, Feature},
};

/// The frozen output of a training run: estimator, codebook, feature schema and
/// the client-facing known values.
///
/// A bundle is never mutated after construction and is shared by every request.
pub struct ArtifactBundle {
    predictor: Box<dyn Predictor>,
    codebook: CategoricalCodebook,
    schema: FeatureSchema,
    known: KnownValues,
}

impl ArtifactBundle {
    /// Assembles a bundle from already built parts.
    ///
    /// # Errors
    /// `WidthMismatch` if the schema length differs from the predictor's input width.
    pub fn new(
        predictor: Box<dyn Predictor>,
        codebook: CategoricalCodebook,
        schema: FeatureSchema,
        known: KnownValues,
    ) -> Result<Self> {
        if schema.len() != predictor.n_features() {
            return Err(ArtifactErr::WidthMismatch {
                schema: schema.len(),
                estimator: predictor.n_features(),
            });
        }

        Ok(Self {
            predictor,
            codebook,
            schema,
            known,
        })
    }

    /// Loads the four artifact blobs from `dir`.
    ///
    /// # Arguments
    /// * `dir` - The directory the training pipeline exported to.
    ///
    /// # Returns
    /// The loaded bundle, or the first `ArtifactErr` found. Any error is fatal.
    pub fn load(dir: &Path) -> Result<Self> {
        let spec: EstimatorSpec = read_blob(dir, ESTIMATOR_FILE)?;
        let predictor = EstimatorBuilder::new().build(&spec)?;

        let encoders: RawVocabularies = read_blob(dir, LABEL_ENCODERS_FILE)?;
        let codebook = CategoricalCodebook::new(encoders).map_err(|source| ArtifactErr::Codebook {
            blob: LABEL_ENCODERS_FILE,
            source,
        })?;

        let names: Vec<String> = read_blob(dir, FEATURE_NAMES_FILE)?;
        let schema = FeatureSchema::new(names)?;

        let values: RawVocabularies = read_blob(dir, CATEGORICAL_VALUES_FILE)?;
        let known = KnownValues::new(values).map_err(|source| ArtifactErr::Codebook {
            blob: CATEGORICAL_VALUES_FILE,
            source,
        })?;

        let bundle = Self::new(predictor, codebook, schema, known)?;
        bundle.report_drift();

        info!(
            "loaded {} with {} features from {}",
            bundle.predictor.algorithm(),
            bundle.schema.len(),
            dir.display()
        );

        Ok(bundle)
    }

    pub fn predictor(&self) -> &dyn Predictor {
        self.predictor.as_ref()
    }

    pub fn codebook(&self) -> &CategoricalCodebook {
        &self.codebook
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn known_values(&self) -> &KnownValues {
        &self.known
    }

    /// Logs the inconsistencies between blobs that only surface per request.
    fn report_drift(&self) {
        for field in self.codebook.unsorted_fields() {
            warn!(
                field = field.name();
                "codebook vocabulary is not sorted, codes only match a training run that stored the same order"
            );
        }

        for field in CategoricalField::ALL {
            let codebook = self.codebook.known_values(field);
            for label in self.known.values(field) {
                if !codebook.contains(label) {
                    warn!("known value '{label}' for {field} has no trained code");
                }
            }
        }

        for name in self.schema.names() {
            if Feature::from_name(name).is_none() {
                warn!("feature '{name}' cannot be read from a house record");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::LinearRegressor;

    fn vocabularies() -> Vec<(String, Vec<String>)> {
        CategoricalField::ALL
            .iter()
            .map(|f| (f.name().to_string(), vec!["a".to_string()]))
            .collect()
    }

    #[test]
    fn width_mismatch_is_fatal() {
        let predictor = Box::new(LinearRegressor::new(0.0, vec![1.0, 1.0]).unwrap());
        let codebook = CategoricalCodebook::new(vocabularies()).unwrap();
        let known = KnownValues::new(vocabularies()).unwrap();
        let schema = FeatureSchema::new(vec!["netArea".into()]).unwrap();

        let err = ArtifactBundle::new(predictor, codebook, schema, known).err().unwrap();
        assert!(matches!(
            err,
            ArtifactErr::WidthMismatch {
                schema: 1,
                estimator: 2
            }
        ));
    }

    #[test]
    fn missing_directory_is_reported_with_its_path() {
        let dir = std::env::temp_dir().join("house-price-api-no-such-dir");
        let err = ArtifactBundle::load(&dir).err().unwrap();

        match err {
            ArtifactErr::Missing { path, .. } => assert!(path.ends_with(ESTIMATOR_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
