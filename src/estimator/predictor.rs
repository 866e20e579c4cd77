use super::{EstimatorErr, Result};

/// A fitted, read-only regression model.
///
/// Implementors are shared across concurrent requests, so `predict` takes `&self`
/// and must not mutate any state.
pub trait Predictor: Send + Sync {
    /// A human readable name of the underlying algorithm.
    fn algorithm(&self) -> &str;

    /// The amount of input features the model was fit on.
    fn n_features(&self) -> usize;

    /// Predicts the target for a single feature vector.
    ///
    /// # Arguments
    /// * `features` - The encoded features, in training column order.
    ///
    /// # Returns
    /// The predicted value or an `EstimatorErr` if the input is unusable.
    fn predict(&self, features: &[f64]) -> Result<f64>;
}

/// Checks the shared input contract of every `Predictor`.
///
/// # Errors
/// `WidthMismatch` if the vector has the wrong length, `NonFiniteInput` on `NaN` or infinities.
pub(super) fn check_input(features: &[f64], expected: usize) -> Result<()> {
    if features.len() != expected {
        return Err(EstimatorErr::WidthMismatch {
            got: features.len(),
            expected,
        });
    }

    match features.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(EstimatorErr::NonFiniteInput { index }),
        None => Ok(()),
    }
}

/// Rejects non finite model outputs.
pub(super) fn check_output(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimatorErr::NonFiniteOutput)
    }
}
