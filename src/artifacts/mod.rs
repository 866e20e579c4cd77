mod bundle;
mod error;
mod loader;

pub use bundle::ArtifactBundle;
pub use error::{ArtifactErr, Result};
pub use loader::{
    CATEGORICAL_VALUES_FILE, ESTIMATOR_FILE, FEATURE_NAMES_FILE, LABEL_ENCODERS_FILE,
};
