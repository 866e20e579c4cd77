use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use super::PredictionService;
use crate::error::{PredictErr, Result};

/// The process-wide model slot.
///
/// Requests take a snapshot of the current service, so unloading never affects
/// a prediction that already started.
#[derive(Default)]
pub struct ModelState {
    service: RwLock<Option<Arc<PredictionService>>>,
}

impl ModelState {
    /// A state with no model loaded, every prediction is `Unavailable`.
    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn loaded(service: PredictionService) -> Self {
        Self {
            service: RwLock::new(Some(Arc::new(service))),
        }
    }

    /// Drops the loaded model.
    pub fn unload(&self) {
        if self.service.write().take().is_some() {
            info!("model unloaded");
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.service.read().is_some()
    }

    /// Returns the loaded service.
    ///
    /// # Errors
    /// `Unavailable` if no model is loaded.
    pub fn current(&self) -> Result<Arc<PredictionService>> {
        self.service.read().clone().ok_or(PredictErr::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unloaded_state_is_unavailable() {
        let state = ModelState::unloaded();
        assert!(!state.is_loaded());
        assert_eq!(state.current().err(), Some(PredictErr::Unavailable));

        state.unload();
        assert!(!state.is_loaded());
    }
}
