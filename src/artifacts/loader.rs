use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use log::debug;
use serde::de::DeserializeOwned;

use super::{ArtifactErr, Result};

pub const ESTIMATOR_FILE: &str = "estimator.json";
pub const LABEL_ENCODERS_FILE: &str = "label_encoders.json";
pub const FEATURE_NAMES_FILE: &str = "feature_names.json";
pub const CATEGORICAL_VALUES_FILE: &str = "categorical_values.json";

/// A `field name -> labels` blob. Labels keep their stored order, field names are unordered.
pub type RawVocabularies = HashMap<String, Vec<String>>;

/// Reads and deserializes one JSON blob from the artifact directory.
///
/// # Arguments
/// * `dir` - The artifact directory.
/// * `file` - The blob's file name.
///
/// # Errors
/// `Missing` if the file cannot be opened, `Corrupt` if it does not deserialize.
pub fn read_blob<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    debug!("reading artifact {}", path.display());

    let reader = match File::open(&path) {
        Ok(file) => BufReader::new(file),
        Err(source) => return Err(ArtifactErr::Missing { path, source }),
    };

    serde_json::from_reader(reader).map_err(|source| ArtifactErr::Corrupt { path, source })
}
