//! Command vocabulary — wire command requests and their typed counterparts.

use serde::{Deserialize, Serialize};

use crate::error::InvalidCommandError;

/// Wire representation of one execution order: the command name as sent by
/// the platform plus its untyped parameter bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

impl CommandRequest {
    /// Build a request from a command name and JSON params.
    #[must_use]
    pub fn new(command: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            command: command.into(),
            params,
        }
    }
}

#[derive(Deserialize)]
struct OnOffParams {
    on: bool,
}

#[derive(Deserialize)]
struct StartStopParams {
    start: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimerParams {
    timer_time_sec: u32,
}

/// A command recognized by at least one device kind.
///
/// Devices ignore commands outside their own vocabulary; a command name not
/// listed here at all is a no-op for every device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    OnOff { on: bool },
    StartStop { start: bool },
    TimerStart { timer_time_sec: u32 },
    TimerAdjust { timer_time_sec: u32 },
    TimerPause,
    TimerCancel,
}

impl DeviceCommand {
    /// Parse a wire request into the typed vocabulary.
    ///
    /// Returns `Ok(None)` when the command name is not recognized (the no-op
    /// path — execution still succeeds and reports unchanged state).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCommandError`] when the command name is recognized
    /// but its params are missing or mistyped.
    pub fn from_request(request: &CommandRequest) -> Result<Option<Self>, InvalidCommandError> {
        let invalid = |err: serde_json::Error| InvalidCommandError {
            command: request.command.clone(),
            reason: err.to_string(),
        };
        let command = match request.command.as_str() {
            "action.devices.commands.OnOff" => {
                let OnOffParams { on } =
                    serde_json::from_value(request.params.clone()).map_err(invalid)?;
                Self::OnOff { on }
            }
            "action.devices.commands.StartStop" => {
                let StartStopParams { start } =
                    serde_json::from_value(request.params.clone()).map_err(invalid)?;
                Self::StartStop { start }
            }
            "action.devices.commands.TimerStart" => {
                let TimerParams { timer_time_sec } =
                    serde_json::from_value(request.params.clone()).map_err(invalid)?;
                Self::TimerStart { timer_time_sec }
            }
            "action.devices.commands.TimerAdjust" => {
                let TimerParams { timer_time_sec } =
                    serde_json::from_value(request.params.clone()).map_err(invalid)?;
                Self::TimerAdjust { timer_time_sec }
            }
            "action.devices.commands.TimerPause" => Self::TimerPause,
            "action.devices.commands.TimerCancel" => Self::TimerCancel,
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}
