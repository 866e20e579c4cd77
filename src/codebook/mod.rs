mod categorical;
mod error;
mod known;
mod vocabulary;

pub use categorical::CategoricalCodebook;
pub use error::{CodebookErr, Result, UnknownLabel};
pub use known::KnownValues;
pub use vocabulary::{preview, Vocabulary};
