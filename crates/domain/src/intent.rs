//! Intent payloads — request/response bodies for the four platform intents.
//!
//! These are the JSON shapes exchanged with the assistant platform, minus the
//! outer `{requestId, inputs}` / `{requestId, payload}` envelope, which the
//! HTTP adapter owns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::command::CommandRequest;
use crate::device::SyncDevice;
use crate::error::ChallengeKind;
use crate::id::DeviceId;
use crate::state::DeviceState;

/// Reference to a target device inside a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRef {
    pub id: DeviceId,
}

/// QUERY request payload: the devices whose state is being asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequestPayload {
    pub devices: Vec<DeviceRef>,
}

/// One command group: a set of target devices sharing one execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandGroup {
    pub devices: Vec<DeviceRef>,
    pub execution: Vec<CommandRequest>,
}

/// EXECUTE request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequestPayload {
    pub commands: Vec<CommandGroup>,
}

/// SYNC response payload: who the agent is and what it exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponsePayload {
    pub agent_user_id: String,
    pub devices: Vec<SyncDevice>,
}

/// QUERY response payload: id → state for every known requested device.
///
/// Unknown ids are omitted, never fabricated. Insertion order follows the
/// request order of the resolved devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponsePayload {
    pub devices: IndexMap<DeviceId, DeviceState>,
}

/// Outcome status of an execute result entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandStatus {
    Success,
    Error,
}

/// Structured challenge payload attached to a challenge-classified error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeNeeded {
    #[serde(rename = "type")]
    pub kind: ChallengeKind,
}

/// One entry in the EXECUTE response: either the shared success bucket or a
/// per-device error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResultEntry {
    pub ids: Vec<DeviceId>,
    pub status: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<DeviceState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_needed: Option<ChallengeNeeded>,
}

impl ExecuteResultEntry {
    /// An empty success bucket, ready to accumulate device ids.
    #[must_use]
    pub fn success_bucket() -> Self {
        Self {
            ids: Vec::new(),
            status: CommandStatus::Success,
            states: None,
            error_code: None,
            challenge_needed: None,
        }
    }

    /// Error entry for one device, classified against the challenge
    /// vocabulary: a recognized challenge code becomes a structured
    /// `challengeNeeded` entry, anything else is surfaced verbatim.
    #[must_use]
    pub fn error(id: DeviceId, code: &str) -> Self {
        let challenge = ChallengeKind::from_code(code);
        Self {
            ids: vec![id],
            status: CommandStatus::Error,
            states: None,
            error_code: Some(
                challenge
                    .map_or_else(|| code.to_string(), |_| "challengeNeeded".to_string()),
            ),
            challenge_needed: challenge.map(|kind| ChallengeNeeded { kind }),
        }
    }
}

/// EXECUTE response payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponsePayload {
    pub commands: Vec<ExecuteResultEntry>,
}
