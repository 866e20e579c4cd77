use std::{
    collections::HashSet,
    error::Error,
    fmt::{self, Display},
    ops::Deref,
};

/// Returned when a feature name appears twice in a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateFeature(pub String);

impl Display for DuplicateFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature '{}' appears more than once in the schema", self.0)
    }
}

impl Error for DuplicateFeature {}

/// The ordered input columns the estimator was trained on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Creates a new `FeatureSchema`.
    ///
    /// # Errors
    /// `DuplicateFeature` if a name is repeated.
    pub fn new(names: Vec<String>) -> Result<Self, DuplicateFeature> {
        let mut seen = HashSet::with_capacity(names.len());
        if let Some(name) = names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(DuplicateFeature(name.clone()));
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A model input, positionally aligned to a `FeatureSchema`.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatureVector(Vec<f64>);

impl EncodedFeatureVector {
    pub(super) fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Deref for EncodedFeatureVector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
