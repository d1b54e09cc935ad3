//! Light — on/off with a cancelable deferred-off timer.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Duration;

use homelink_domain::command::DeviceCommand;
use homelink_domain::device::{DeviceAttributes, DeviceName, DeviceType, SyncDevice, TraitKind};
use homelink_domain::error::ExecuteError;
use homelink_domain::id::DeviceId;
use homelink_domain::state::DeviceState;

use crate::ports::HardwareOutput;

/// No-active-timer sentinel for the light's remaining seconds.
const NO_TIMER: i64 = -1;

#[derive(Debug)]
struct LightState {
    on: bool,
    timer_remaining_sec: i64,
}

/// A light bound to one hardware channel, with an automatic-off timer.
///
/// Hardware policy: the pin is written only when `OnOff` transitions the
/// state or when the deferred-off action fires (edge-triggered), unlike the
/// switch's unconditional re-sync.
#[derive(Debug)]
pub struct Light<H> {
    id: DeviceId,
    channel: u8,
    hardware: H,
    state: Arc<Mutex<LightState>>,
    /// Pending deferred-off action. At most one per device: re-arming
    /// aborts the previous task before scheduling the next.
    timer: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl<H> Light<H> {
    /// Create a light with default state (off, no timer).
    pub fn new(id: impl Into<DeviceId>, channel: u8, hardware: H) -> Self {
        Self {
            id: id.into(),
            channel,
            hardware,
            state: Arc::new(Mutex::new(LightState {
                on: false,
                timer_remaining_sec: NO_TIMER,
            })),
            timer: std::sync::Mutex::new(None),
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
            device_type: DeviceType::Light,
            traits: vec![TraitKind::OnOff, TraitKind::Timer],
            name: DeviceName::uniform("Lights"),
            will_report_state: true,
            attributes: Some(DeviceAttributes {
                pausable: Some(false),
                max_timer_limit_sec: Some(7200),
                command_only_timer: Some(false),
                ..DeviceAttributes::default()
            }),
        }
    }

    fn abort_pending_timer(&self) {
        if let Some(handle) = self.timer.lock().expect("timer lock poisoned").take() {
            handle.abort();
        }
    }
}

impl<H: HardwareOutput + Clone + Send + Sync + 'static> Light<H> {
    /// Current observable snapshot.
    pub async fn state(&self) -> DeviceState {
        let state = self.state.lock().await;
        DeviceState::Light {
            online: true,
            on: state.on,
            timer_remaining_sec: state.timer_remaining_sec,
        }
    }

    /// Apply one command.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::Hardware`] when an `OnOff` transition cannot
    /// be written to the pin.
    pub async fn execute(&self, command: Option<&DeviceCommand>) -> Result<(), ExecuteError> {
        match command {
            Some(DeviceCommand::OnOff { on }) => {
                let mut state = self.state.lock().await;
                state.on = *on;
                self.hardware.write(self.channel, *on)?;
            }
            Some(DeviceCommand::TimerStart { timer_time_sec }) => {
                let seconds = *timer_time_sec;
                self.state.lock().await.timer_remaining_sec = i64::from(seconds);
                self.arm_timer(seconds);
            }
            Some(DeviceCommand::TimerCancel) => {
                self.state.lock().await.timer_remaining_sec = NO_TIMER;
                self.abort_pending_timer();
            }
            // TimerAdjust/TimerPause are not part of the light's vocabulary.
            _ => {}
        }
        Ok(())
    }

    /// Replace any pending deferred-off action with one firing after
    /// `seconds` of wall-clock time.
    fn arm_timer(&self, seconds: u32) {
        let state = Arc::clone(&self.state);
        let hardware = self.hardware.clone();
        let channel = self.channel;
        let id = self.id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(u64::from(seconds))).await;
            let mut state = state.lock().await;
            state.on = false;
            if let Err(err) = hardware.write(channel, false) {
                tracing::warn!(device = %id, error = %err, "deferred off-write failed");
            }
        });
        // Swap under one lock so two pending tasks can never coexist.
        let mut timer = self.timer.lock().expect("timer lock poisoned");
        if let Some(previous) = timer.replace(handle) {
            previous.abort();
        }
    }
}

impl<H> Drop for Light<H> {
    fn drop(&mut self) {
        self.abort_pending_timer();
    }
}
