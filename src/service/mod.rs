mod batch;
mod format;
mod prediction;
mod state;

pub use batch::{BatchItem, BatchOutcome, BatchReport, MAX_BATCH_SIZE};
pub use format::{format_price, CURRENCY_SUFFIX};
pub use prediction::{ModelInfo, Prediction, PredictionMetadata, PredictionService, SUPPORTED_CITIES_LEN};
pub use state::ModelState;
