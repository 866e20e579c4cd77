use super::{vocabulary::resolve_fields, Result, UnknownLabel, Vocabulary};
use crate::record::CategoricalField;

/// The label to integer code mapping fit at training time, one vocabulary per categorical field.
///
/// Codes are replayed exactly as stored, the codebook never re-sorts or re-fits a vocabulary.
#[derive(Debug, Clone)]
pub struct CategoricalCodebook {
    vocabularies: Vec<Vocabulary>,
}

impl CategoricalCodebook {
    /// Builds a codebook from raw `field name -> labels in code order` pairs.
    ///
    /// # Arguments
    /// * `raw` - The stored vocabularies, keyed by wire name or training column name.
    ///
    /// # Returns
    /// A new codebook, or a `CodebookErr` if a field is missing, unknown, empty or has duplicates.
    pub fn new<I>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let vocabularies = resolve_fields(raw)?;
        Ok(Self { vocabularies })
    }

    /// Returns the trained code for `label`.
    ///
    /// # Errors
    /// Returns `UnknownLabel` if the label was not seen at training time.
    pub fn encode(&self, field: CategoricalField, label: &str) -> std::result::Result<u32, UnknownLabel> {
        self.vocabulary(field)
            .code(label)
            .ok_or_else(|| UnknownLabel {
                field,
                label: label.to_string(),
            })
    }

    /// Returns the label that was assigned `code`, if any.
    pub fn decode(&self, field: CategoricalField, code: u32) -> Option<&str> {
        self.vocabulary(field).label(code)
    }

    /// Returns the trained labels of `field` in code order.
    pub fn known_values(&self, field: CategoricalField) -> &[String] {
        self.vocabulary(field).labels()
    }

    /// Returns the fields whose stored vocabulary is not in ascending order.
    pub fn unsorted_fields(&self) -> Vec<CategoricalField> {
        CategoricalField::ALL
            .into_iter()
            .filter(|&field| !self.vocabulary(field).is_sorted())
            .collect()
    }

    fn vocabulary(&self, field: CategoricalField) -> &Vocabulary {
        &self.vocabularies[field as usize]
    }
}
