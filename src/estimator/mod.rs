mod builder;
mod error;
mod forest;
mod linear;
mod predictor;
mod spec;

pub use builder::EstimatorBuilder;
pub use error::{EstimatorErr, Result};
pub use forest::{ForestRegressor, RegressionTree};
pub use linear::LinearRegressor;
pub use predictor::Predictor;
pub use spec::{EstimatorSpec, NodeSpec, TreeSpec};
