//! Oven — start/stop with temperature control and a pausable timer.

use tokio::sync::Mutex;

use homelink_domain::command::DeviceCommand;
use homelink_domain::device::{
    DeviceAttributes, DeviceName, DeviceType, SyncDevice, TemperatureRange, TraitKind,
};
use homelink_domain::error::ExecuteError;
use homelink_domain::id::DeviceId;
use homelink_domain::state::DeviceState;

/// Timer value re-armed by every `StartStop`, regardless of prior state.
const START_STOP_TIMER_SEC: u32 = 1000;

/// Default temperature setpoint in Celsius.
const DEFAULT_TEMPERATURE: f64 = 50.0;

#[derive(Debug)]
struct OvenState {
    on: bool,
    paused: bool,
    temperature_setpoint_celsius: f64,
    timer_remaining_sec: u32,
}

/// An oven with no hardware output; all state lives in memory.
#[derive(Debug)]
pub struct Oven {
    id: DeviceId,
    state: Mutex<OvenState>,
}

impl Oven {
    /// Create an oven with default state (stopped, 50 °C, no timer).
    pub fn new(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            state: Mutex::new(OvenState {
                on: false,
                paused: false,
                temperature_setpoint_celsius: DEFAULT_TEMPERATURE,
                timer_remaining_sec: 0,
            }),
        }
    }

    /// The device's immutable identity.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Static discovery descriptor.
    #[must_use]
    pub fn sync(&self) -> SyncDevice {
        SyncDevice {
            id: self.id.clone(),
            device_type: DeviceType::Oven,
            traits: vec![
                TraitKind::TemperatureControl,
                TraitKind::StartStop,
                TraitKind::Timer,
            ],
            name: DeviceName::uniform("Oven"),
            will_report_state: true,
            attributes: Some(DeviceAttributes {
                temperature_unit_for_ux: Some("C".to_string()),
                temperature_range: Some(TemperatureRange {
                    min_threshold_celsius: 65.0,
                    max_threshold_celsius: 300.0,
                }),
                temperature_step_celsius: Some(5.0),
                pausable: Some(false),
                max_timer_limit_sec: Some(3600),
                command_only_timer: Some(false),
            }),
        }
    }

    /// Current observable snapshot.
    pub async fn state(&self) -> DeviceState {
        let state = self.state.lock().await;
        DeviceState::Oven {
            online: true,
            is_running: state.on,
            is_paused: state.paused,
            temperature_setpoint_celsius: state.temperature_setpoint_celsius,
            timer_remaining_sec: state.timer_remaining_sec,
        }
    }

    /// Apply one command. Never fails: every mutation is in-memory.
    ///
    /// # Errors
    ///
    /// Infallible today; the signature stays fallible to match the shared
    /// capability surface.
    pub async fn execute(&self, command: Option<&DeviceCommand>) -> Result<(), ExecuteError> {
        let mut state = self.state.lock().await;
        match command {
            Some(DeviceCommand::StartStop { start }) => {
                // Starting or stopping always re-arms the timer to the
                // default rather than preserving it.
                state.on = *start;
                state.paused = false;
                state.timer_remaining_sec = START_STOP_TIMER_SEC;
            }
            Some(DeviceCommand::TimerStart { timer_time_sec }) => {
                state.timer_remaining_sec = *timer_time_sec;
                state.paused = false;
            }
            Some(DeviceCommand::TimerAdjust { timer_time_sec }) => {
                state.timer_remaining_sec = *timer_time_sec;
            }
            Some(DeviceCommand::TimerPause) => {
                state.paused = true;
            }
            Some(DeviceCommand::TimerCancel) => {
                state.paused = false;
                state.timer_remaining_sec = 0;
            }
            // OnOff and anything else is outside the oven's vocabulary.
            _ => {}
        }
        Ok(())
    }
}
