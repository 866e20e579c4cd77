use std::{
    error::Error,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

use crate::{codebook::CodebookErr, encoding::DuplicateFeature, estimator::EstimatorErr};

/// The result type used while loading the artifact bundle.
pub type Result<T> = std::result::Result<T, ArtifactErr>;

/// Startup-fatal failures while loading the artifact bundle.
#[derive(Debug)]
pub enum ArtifactErr {
    /// A blob could not be opened.
    Missing { path: PathBuf, source: io::Error },
    /// A blob exists but is not valid JSON of the expected shape.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    Codebook {
        blob: &'static str,
        source: CodebookErr,
    },
    Estimator(EstimatorErr),
    Schema(DuplicateFeature),
    /// The feature schema and the estimator disagree on the input width.
    WidthMismatch { schema: usize, estimator: usize },
}

impl Display for ArtifactErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactErr::Missing { path, source } => {
                write!(f, "failed to open artifact '{}': {source}", path.display())
            }
            ArtifactErr::Corrupt { path, source } => {
                write!(f, "invalid artifact '{}': {source}", path.display())
            }
            ArtifactErr::Codebook { blob, source } => write!(f, "invalid {blob}: {source}"),
            ArtifactErr::Estimator(e) => write!(f, "invalid estimator: {e}"),
            ArtifactErr::Schema(e) => write!(f, "invalid feature schema: {e}"),
            ArtifactErr::WidthMismatch { schema, estimator } => write!(
                f,
                "the feature schema has {schema} columns but the estimator expects {estimator}"
            ),
        }
    }
}

impl Error for ArtifactErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactErr::Missing { source, .. } => Some(source),
            ArtifactErr::Corrupt { source, .. } => Some(source),
            ArtifactErr::Codebook { source, .. } => Some(source),
            ArtifactErr::Estimator(e) => Some(e),
            ArtifactErr::Schema(e) => Some(e),
            ArtifactErr::WidthMismatch { .. } => None,
        }
    }
}

impl From<EstimatorErr> for ArtifactErr {
    fn from(value: EstimatorErr) -> Self {
        Self::Estimator(value)
    }
}

impl From<DuplicateFeature> for ArtifactErr {
    fn from(value: DuplicateFeature) -> Self {
        Self::Schema(value)
    }
}
