//! State reporter port — best-effort state push to the upstream platform.

use std::future::Future;

use indexmap::IndexMap;

use homelink_domain::error::ReportError;
use homelink_domain::id::DeviceId;
use homelink_domain::state::DeviceState;

/// One asynchronous state push: which agent, which request, which devices.
#[derive(Debug, Clone, PartialEq)]
pub struct StateReport {
    pub agent_user_id: String,
    pub request_id: String,
    pub states: IndexMap<DeviceId, DeviceState>,
}

impl StateReport {
    /// Build a report for a single device.
    #[must_use]
    pub fn single(
        agent_user_id: impl Into<String>,
        request_id: impl Into<String>,
        id: DeviceId,
        state: DeviceState,
    ) -> Self {
        Self {
            agent_user_id: agent_user_id.into(),
            request_id: request_id.into(),
            states: IndexMap::from_iter([(id, state)]),
        }
    }
}

/// Pushes device state to the upstream platform.
///
/// Delivery is best-effort: failures are caught and logged by the caller,
/// never propagated into the command response.
pub trait StateReporter {
    /// Deliver one state report upstream.
    fn report(&self, report: StateReport) -> impl Future<Output = Result<(), ReportError>> + Send;
}

impl<T: StateReporter + Send + Sync> StateReporter for std::sync::Arc<T> {
    fn report(&self, report: StateReport) -> impl Future<Output = Result<(), ReportError>> + Send {
        (**self).report(report)
    }
}
