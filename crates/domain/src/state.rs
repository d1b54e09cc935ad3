//! State snapshots — what a device reports during QUERY and after EXECUTE.

use serde::{Deserialize, Serialize};

/// Current observable snapshot of a single device.
///
/// Each variant mirrors exactly the fields its device kind exposes on the
/// wire. The snapshot is always derivable from the device's current fields
/// alone — there is no hidden external state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeviceState {
    /// Oven snapshot.
    #[serde(rename_all = "camelCase")]
    Oven {
        online: bool,
        is_running: bool,
        is_paused: bool,
        temperature_setpoint_celsius: f64,
        /// Remaining timer seconds; `0` means no active timer.
        timer_remaining_sec: u32,
    },
    /// Light snapshot.
    #[serde(rename_all = "camelCase")]
    Light {
        online: bool,
        on: bool,
        /// Remaining timer seconds; `-1` is the "no active timer" sentinel.
        timer_remaining_sec: i64,
    },
    /// Switch snapshot. The switch reports only its on/off flag.
    Switch { on: bool },
}

impl DeviceState {
    /// Whether the device currently considers itself on/running.
    #[must_use]
    pub fn is_on(&self) -> bool {
        match self {
            Self::Oven { is_running, .. } => *is_running,
            Self::Light { on, .. } | Self::Switch { on } => *on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_switch_state_with_only_on_flag() {
        let state = DeviceState::Switch { on: true };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json, serde_json::json!({"on": true}));
    }

    #[test]
    fn should_serialize_light_state_with_sentinel_timer() {
        let state = DeviceState::Light {
            online: true,
            on: false,
            timer_remaining_sec: -1,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"online": true, "on": false, "timerRemainingSec": -1})
        );
    }

    #[test]
    fn should_serialize_oven_state_with_camel_case_keys() {
        let state = DeviceState::Oven {
            online: true,
            is_running: true,
            is_paused: false,
            temperature_setpoint_celsius: 50.0,
            timer_remaining_sec: 1000,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["isRunning"], true);
        assert_eq!(json["isPaused"], false);
        assert_eq!(json["temperatureSetpointCelsius"], 50.0);
        assert_eq!(json["timerRemainingSec"], 1000);
    }

    #[test]
    fn should_report_on_flag_across_variants() {
        assert!(DeviceState::Switch { on: true }.is_on());
        assert!(
            !DeviceState::Light {
                online: true,
                on: false,
                timer_remaining_sec: -1
            }
            .is_on()
        );
        assert!(
            DeviceState::Oven {
                online: true,
                is_running: true,
                is_paused: false,
                temperature_setpoint_celsius: 50.0,
                timer_remaining_sec: 0
            }
            .is_on()
        );
    }
}
