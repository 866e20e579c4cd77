use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::record::CategoricalField;

/// The result type used when building vocabularies.
pub type Result<T> = std::result::Result<T, CodebookErr>;

/// Errors found while building a `CategoricalCodebook` or `KnownValues` from their raw lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodebookErr {
    MissingField(CategoricalField),
    EmptyVocabulary(CategoricalField),
    DuplicateLabel {
        field: &'static str,
        label: String,
    },
    UnknownField(String),
    /// The same field is named twice, e.g. once as `city` and once as `sehir`.
    DuplicateField(&'static str),
}

impl Display for CodebookErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodebookErr::MissingField(field) => write!(f, "no vocabulary for field '{field}'"),
            CodebookErr::EmptyVocabulary(field) => {
                write!(f, "the vocabulary for field '{field}' is empty")
            }
            CodebookErr::DuplicateLabel { field, label } => {
                write!(f, "label '{label}' appears twice in the vocabulary for '{field}'")
            }
            CodebookErr::UnknownField(name) => write!(f, "'{name}' is not a categorical field"),
            CodebookErr::DuplicateField(field) => {
                write!(f, "field '{field}' has more than one vocabulary")
            }
        }
    }
}

impl Error for CodebookErr {}

/// Returned when a label is not part of a field's trained vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    pub field: CategoricalField,
    pub label: String,
}

impl Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a known value for '{}'", self.label, self.field)
    }
}

impl Error for UnknownLabel {}
