//! Discovery descriptors — static metadata a device reports during SYNC.
//!
//! Serialized shapes follow the Google smart-home fulfillment wire format
//! (`action.devices.types.*`, `action.devices.traits.*`).

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// Device type tag reported during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceType {
    #[serde(rename = "action.devices.types.SWITCH")]
    Switch,
    #[serde(rename = "action.devices.types.LIGHT")]
    Light,
    #[serde(rename = "action.devices.types.OVEN")]
    Oven,
}

/// A named capability contract a device declares support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitKind {
    #[serde(rename = "action.devices.traits.OnOff")]
    OnOff,
    #[serde(rename = "action.devices.traits.StartStop")]
    StartStop,
    #[serde(rename = "action.devices.traits.Timer")]
    Timer,
    #[serde(rename = "action.devices.traits.TemperatureControl")]
    TemperatureControl,
}

/// Display names reported during discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceName {
    pub default_names: Vec<String>,
    pub name: String,
    pub nicknames: Vec<String>,
}

impl DeviceName {
    /// Build a name block where all three fields derive from one label.
    #[must_use]
    pub fn uniform(label: &str) -> Self {
        Self {
            default_names: vec![label.to_string()],
            name: label.to_string(),
            nicknames: vec![label.to_lowercase()],
        }
    }
}

/// Allowed temperature window, in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRange {
    pub min_threshold_celsius: f64,
    pub max_threshold_celsius: f64,
}

/// Capability-attribute bag reported during discovery.
///
/// Each device kind populates only the fields relevant to its traits;
/// absent fields are omitted from the wire payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_unit_for_ux: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_range: Option<TemperatureRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_step_celsius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pausable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_timer_limit_sec: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_only_timer: Option<bool>,
}

/// Static discovery descriptor for a single device.
///
/// Pure function of the device kind — never depends on mutable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncDevice {
    pub id: DeviceId,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub traits: Vec<TraitKind>,
    pub name: DeviceName,
    pub will_report_state: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<DeviceAttributes>,
}
