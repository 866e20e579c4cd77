use std::collections::HashMap;

use super::{CodebookErr, Result};
use crate::record::CategoricalField;

/// An ordered, deduplicated list of labels where each label's code is its position.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    labels: Vec<String>,
    codes: HashMap<String, u32>,
}

impl Vocabulary {
    /// Creates a new `Vocabulary`, keeping the given label order.
    ///
    /// # Arguments
    /// * `field` - The field this vocabulary belongs to, used for error reporting.
    /// * `labels` - The labels in code order.
    ///
    /// # Returns
    /// A new vocabulary or a `CodebookErr` if the list is empty or has duplicates.
    pub fn new(field: CategoricalField, labels: Vec<String>) -> Result<Self> {
        if labels.is_empty() {
            return Err(CodebookErr::EmptyVocabulary(field));
        }

        let mut codes = HashMap::with_capacity(labels.len());
        for (code, label) in labels.iter().enumerate() {
            if codes.insert(label.clone(), code as u32).is_some() {
                return Err(CodebookErr::DuplicateLabel {
                    field: field.name(),
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels, codes })
    }

    pub fn code(&self, label: &str) -> Option<u32> {
        self.codes.get(label).copied()
    }

    pub fn label(&self, code: u32) -> Option<&str> {
        self.labels.get(code as usize).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, label: &str) -> bool {
        self.codes.contains_key(label)
    }

    /// Whether the labels are in the byte-wise ascending order a fresh alphabetical fit would produce.
    pub fn is_sorted(&self) -> bool {
        self.labels.windows(2).all(|w| w[0] < w[1])
    }
}

/// Resolves raw `name -> labels` pairs into one vocabulary per categorical field,
/// ordered as `CategoricalField::ALL`.
///
/// Every categorical field must be present exactly once. Names are resolved with
/// `CategoricalField::from_name`, so training column names are accepted.
pub(super) fn resolve_fields<I>(raw: I) -> Result<Vec<Vocabulary>>
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    let mut slots: Vec<Option<Vocabulary>> = vec![None; CategoricalField::ALL.len()];

    for (name, labels) in raw {
        let field = CategoricalField::from_name(&name).ok_or(CodebookErr::UnknownField(name))?;
        let slot = &mut slots[field as usize];
        if slot.is_some() {
            return Err(CodebookErr::DuplicateField(field.name()));
        }
        *slot = Some(Vocabulary::new(field, labels)?);
    }

    CategoricalField::ALL
        .iter()
        .zip(slots)
        .map(|(&field, slot)| slot.ok_or(CodebookErr::MissingField(field)))
        .collect()
}

/// Builds the short diagnostic list of valid values shown to clients.
///
/// At most `limit` labels are joined with `", "`, an ellipsis marks truncation.
pub fn preview(labels: &[String], limit: usize) -> String {
    let mut out = labels
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if labels.len() > limit {
        out.push_str("...");
    }

    out
}
