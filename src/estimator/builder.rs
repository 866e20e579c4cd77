use super::{EstimatorSpec, ForestRegressor, LinearRegressor, Predictor, Result};

/// Builds `Predictor`s given a specification.
pub struct EstimatorBuilder;

impl EstimatorBuilder {
    /// Creates a new `EstimatorBuilder`.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Predictor` following a spec.
    ///
    /// # Arguments
    /// * `spec` - The serialized estimator.
    ///
    /// # Returns
    /// A boxed predictor, or an `EstimatorErr` if the spec is malformed.
    pub fn build(&self, spec: &EstimatorSpec) -> Result<Box<dyn Predictor>> {
        match spec {
            EstimatorSpec::RandomForest { n_features, trees } => {
                let forest = ForestRegressor::new(*n_features, trees)?;
                Ok(Box::new(forest))
            }
            EstimatorSpec::Linear {
                intercept,
                coefficients,
            } => {
                let linear = LinearRegressor::new(*intercept, coefficients.clone())?;
                Ok(Box::new(linear))
            }
        }
    }
}

impl Default for EstimatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
