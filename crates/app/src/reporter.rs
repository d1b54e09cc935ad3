//! Logging state reporter — the in-process fallback when no upstream
//! HomeGraph credentials are configured.

use std::future::Future;

use homelink_domain::error::ReportError;

use crate::ports::{StateReport, StateReporter};

/// Reporter that logs each report at `INFO` and always succeeds.
///
/// Used when the bridge runs without a service-account key for the
/// upstream report-state API.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogStateReporter;

impl StateReporter for LogStateReporter {
    fn report(&self, report: StateReport) -> impl Future<Output = Result<(), ReportError>> + Send {
        for (id, state) in &report.states {
            tracing::info!(
                agent_user_id = %report.agent_user_id,
                request_id = %report.request_id,
                device = %id,
                ?state,
                "device state reported"
            );
        }
        async { Ok(()) }
    }
}
