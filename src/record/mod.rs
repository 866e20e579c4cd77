mod field;
mod house;

pub use field::{CategoricalField, Feature};
pub use house::{FieldValue, HouseRecord};
