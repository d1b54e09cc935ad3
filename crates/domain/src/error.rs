//! Error types shared across the workspace.
//!
//! Each failure mode the dispatch policy distinguishes gets its own type;
//! the `Display` output of an execution error is the verbatim wire error
//! code surfaced to the platform.

use serde::{Deserialize, Serialize};

/// Additional-verification requirement the platform can demand instead of
/// completing an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChallengeKind {
    PinNeeded,
    ChallengeFailedPinNeeded,
    AckNeeded,
}

impl ChallengeKind {
    /// Wire code for this challenge kind.
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::PinNeeded => "pinNeeded",
            Self::ChallengeFailedPinNeeded => "challengeFailedPinNeeded",
            Self::AckNeeded => "ackNeeded",
        }
    }

    /// Classify an execution error code against the fixed challenge
    /// vocabulary. Codes outside the vocabulary return `None` and are
    /// surfaced verbatim as generic errors.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pinNeeded" => Some(Self::PinNeeded),
            "challengeFailedPinNeeded" => Some(Self::ChallengeFailedPinNeeded),
            "ackNeeded" => Some(Self::AckNeeded),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Hardware output write failure.
#[derive(Debug, thiserror::Error)]
#[error("hardwareError")]
pub struct HardwareError {
    /// Channel the write targeted.
    pub channel: u8,
    /// Underlying IO failure.
    #[source]
    pub source: std::io::Error,
}

/// A recognized command whose params were missing or mistyped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalidCommand")]
pub struct InvalidCommandError {
    /// The wire command name.
    pub command: String,
    /// Human-readable parse failure, for logs only.
    pub reason: String,
}

/// Failure raised while executing a command on a device.
///
/// The `Display` output is the wire error code the dispatcher classifies:
/// challenge codes become structured `challengeNeeded` entries, anything
/// else is surfaced verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    /// Execution demands additional end-user verification.
    #[error("{}", .0.as_code())]
    Challenge(ChallengeKind),
    /// The device's hardware output could not be written.
    #[error(transparent)]
    Hardware(#[from] HardwareError),
    /// Recognized command with malformed params.
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommandError),
    /// Any other failure; the string is the wire error code.
    #[error("{0}")]
    Failed(String),
}

/// State-report delivery failure. Logged, never escalated to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The upstream platform rejected or never received the report.
    #[error("state report rejected upstream: {0}")]
    Upstream(String),
}

/// Fleet construction failure.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two devices were registered under the same id.
    #[error("duplicate device id: {0}")]
    DuplicateDevice(crate::id::DeviceId),
}
