//! Shared in-memory port stubs for unit tests.

use std::sync::Mutex;

use homelink_domain::error::{HardwareError, ReportError};

use crate::ports::{HardwareOutput, StateReport, StateReporter};

/// Hardware sink that records every write, optionally failing them all.
#[derive(Debug, Default)]
pub(crate) struct RecordingHardware {
    writes: Mutex<Vec<(u8, bool)>>,
    fail: bool,
}

impl RecordingHardware {
    pub(crate) fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn writes(&self) -> Vec<(u8, bool)> {
        self.writes.lock().unwrap().clone()
    }
}

impl HardwareOutput for RecordingHardware {
    fn write(&self, channel: u8, level: bool) -> Result<(), HardwareError> {
        if self.fail {
            return Err(HardwareError {
                channel,
                source: std::io::Error::other("stub failure"),
            });
        }
        self.writes.lock().unwrap().push((channel, level));
        Ok(())
    }
}

/// Reporter that records every report, optionally failing them all.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    reports: Mutex<Vec<StateReport>>,
    fail: bool,
}

impl RecordingReporter {
    pub(crate) fn failing() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn reports(&self) -> Vec<StateReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl StateReporter for RecordingReporter {
    fn report(
        &self,
        report: StateReport,
    ) -> impl std::future::Future<Output = Result<(), ReportError>> + Send {
        let result = if self.fail {
            Err(ReportError::Upstream("stub failure".to_string()))
        } else {
            self.reports.lock().unwrap().push(report);
            Ok(())
        };
        async { result }
    }
}
