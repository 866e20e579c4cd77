mod assembler;
mod floor;
mod schema;

pub use assembler::FeatureVectorAssembler;
pub use floor::{FloorEncoder, InvalidFloor, GROUND_FLOOR};
pub use schema::{DuplicateFeature, EncodedFeatureVector, FeatureSchema};
