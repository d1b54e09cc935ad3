//! Smart switch — on/off with an unconditionally re-synced hardware pin.

use tokio::sync::Mutex;

use homelink_domain::command::DeviceCommand;
use homelink_domain::device::{DeviceName, DeviceType, SyncDevice, TraitKind};
use homelink_domain::error::ExecuteError;
use homelink_domain::id::DeviceId;
use homelink_domain::state::DeviceState;

use crate::ports::HardwareOutput;

/// A plain on/off switch bound to one hardware channel.
///
/// Hardware policy: the pin level is re-derived from the current `on` flag
/// and written after *every* execute call, recognized command or not. The
/// pin therefore always converges to the in-memory state (idempotent
/// re-sync), unlike the light's edge-triggered writes.
#[derive(Debug)]
pub struct Switch<H> {
    id: DeviceId,
    channel: u8,
    hardware: H,
    on: Mutex<bool>,
}

impl<H> Switch<H> {
    /// Create a switch with default state (off).
    pub fn new(id: impl Into<DeviceId>, channel: u8, hardware: H) -> Self {
        Self {
            id: id.into(),
            channel,
            hardware,
            on: Mutex::new(false),
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
            device_type: DeviceType::Switch,
            traits: vec![TraitKind::OnOff],
            name: DeviceName::uniform("Smart Switch"),
            will_report_state: true,
            attributes: None,
        }
    }
}

impl<H: HardwareOutput> Switch<H> {
    /// Current observable snapshot.
    pub async fn state(&self) -> DeviceState {
        DeviceState::Switch {
            on: *self.on.lock().await,
        }
    }

    /// Apply one command.
    ///
    /// Unrecognized commands leave the state untouched, but the hardware
    /// write still happens with whatever `on` currently holds.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::Hardware`] when the pin cannot be written.
    pub async fn execute(&self, command: Option<&DeviceCommand>) -> Result<(), ExecuteError> {
        let mut on = self.on.lock().await;
        if let Some(DeviceCommand::OnOff { on: value }) = command {
            *on = *value;
        }
        self.hardware.write(self.channel, *on)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHardware;
    use std::sync::Arc;

    #[tokio::test]
    async fn should_turn_on_and_reflect_state() {
        let hardware = Arc::new(RecordingHardware::default());
        let switch = Switch::new("sw1", 0, Arc::clone(&hardware));

        switch
            .execute(Some(&DeviceCommand::OnOff { on: true }))
            .await
            .unwrap();

        assert_eq!(switch.state().await, DeviceState::Switch { on: true });
    }

    #[tokio::test]
    async fn should_write_pin_level_on_every_execute() {
        let hardware = Arc::new(RecordingHardware::default());
        let switch = Switch::new("sw1", 0, Arc::clone(&hardware));

        switch
            .execute(Some(&DeviceCommand::OnOff { on: true }))
            .await
            .unwrap();
        // Unrecognized command: state untouched, pin re-synced anyway.
        switch.execute(None).await.unwrap();

        assert_eq!(hardware.writes(), vec![(0, true), (0, true)]);
        assert_eq!(switch.state().await, DeviceState::Switch { on: true });
    }

    #[tokio::test]
    async fn should_ignore_commands_outside_vocabulary() {
        let hardware = Arc::new(RecordingHardware::default());
        let switch = Switch::new("sw2", 1, Arc::clone(&hardware));

        switch
            .execute(Some(&DeviceCommand::TimerStart { timer_time_sec: 10 }))
            .await
            .unwrap();

        assert_eq!(switch.state().await, DeviceState::Switch { on: false });
        assert_eq!(hardware.writes(), vec![(1, false)]);
    }

    #[tokio::test]
    async fn should_surface_hardware_failure_as_execute_error() {
        let hardware = Arc::new(RecordingHardware::failing());
        let switch = Switch::new("sw1", 0, hardware);

        let err = switch
            .execute(Some(&DeviceCommand::OnOff { on: true }))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "hardwareError");
    }

    #[test]
    fn should_describe_switch_without_attributes() {
        let switch = Switch::new("sw1", 0, Arc::new(RecordingHardware::default()));
        let descriptor = switch.sync();
        assert_eq!(descriptor.device_type, DeviceType::Switch);
        assert_eq!(descriptor.traits, vec![TraitKind::OnOff]);
        assert!(descriptor.will_report_state);
        assert!(descriptor.attributes.is_none());
    }
}
