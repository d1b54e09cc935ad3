//! Shared application state for axum handlers.

use std::sync::Arc;

use homelink_app::ports::{HardwareOutput, StateReporter};
use homelink_app::services::IntentService;

/// Application state shared across all axum handlers.
///
/// Generic over the hardware output and state reporter to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<H, R> {
    /// Intent dispatch service.
    pub intent_service: Arc<IntentService<H, R>>,
}

impl<H, R> Clone for AppState<H, R> {
    fn clone(&self) -> Self {
        Self {
            intent_service: Arc::clone(&self.intent_service),
        }
    }
}

impl<H, R> AppState<H, R>
where
    H: HardwareOutput + Clone + Send + Sync + 'static,
    R: StateReporter + Send + Sync + 'static,
{
    /// Create application state from the intent service.
    pub fn new(intent_service: IntentService<H, R>) -> Self {
        Self {
            intent_service: Arc::new(intent_service),
        }
    }
}
