use super::{
    predictor::{check_input, check_output},
    EstimatorErr, Predictor, Result,
};

/// An ordinary least squares model: `intercept + Σ coefficients[i] * x[i]`.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearRegressor {
    /// Creates a new `LinearRegressor`.
    ///
    /// # Errors
    /// `EmptyCoefficients` if there are no coefficients.
    pub fn new(intercept: f64, coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(EstimatorErr::EmptyCoefficients);
        }

        Ok(Self {
            intercept,
            coefficients,
        })
    }
}

impl Predictor for LinearRegressor {
    fn algorithm(&self) -> &str {
        "Linear Regression"
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        check_input(features, self.coefficients.len())?;

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum();

        check_output(self.intercept + dot)
    }
}
