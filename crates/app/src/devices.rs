//! Device variants — the closed set of appliance kinds behind one
//! capability surface.
//!
//! Each variant owns its full state machine. New kinds are added by adding
//! variants here, never by branching on id strings elsewhere.

pub mod light;
pub mod oven;
pub mod switch;

pub use light::Light;
pub use oven::Oven;
pub use switch::Switch;

use homelink_domain::command::DeviceCommand;
use homelink_domain::device::SyncDevice;
use homelink_domain::error::ExecuteError;
use homelink_domain::id::DeviceId;
use homelink_domain::state::DeviceState;

use crate::ports::HardwareOutput;

/// One appliance of any kind.
///
/// `execute` receives `None` when the wire command was not recognized by any
/// device: every variant treats that as a state no-op, but the switch still
/// performs its unconditional hardware re-sync.
#[derive(Debug)]
pub enum Appliance<H> {
    Switch(Switch<H>),
    Light(Light<H>),
    Oven(Oven),
}

impl<H: HardwareOutput + Clone + Send + Sync + 'static> Appliance<H> {
    /// The device's immutable identity.
    #[must_use]
    pub fn id(&self) -> &DeviceId {
        match self {
            Self::Switch(device) => device.id(),
            Self::Light(device) => device.id(),
            Self::Oven(device) => device.id(),
        }
    }

    /// Static discovery descriptor for this device.
    #[must_use]
    pub fn sync(&self) -> SyncDevice {
        match self {
            Self::Switch(device) => device.sync(),
            Self::Light(device) => device.sync(),
            Self::Oven(device) => device.sync(),
        }
    }

    /// Current observable snapshot.
    pub async fn state(&self) -> DeviceState {
        match self {
            Self::Switch(device) => device.state().await,
            Self::Light(device) => device.state().await,
            Self::Oven(device) => device.state().await,
        }
    }

    /// Apply one command to this device.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError`] when device logic or a downstream
    /// collaborator fails; recognized commands with valid params never fail
    /// on their own.
    pub async fn execute(&self, command: Option<&DeviceCommand>) -> Result<(), ExecuteError> {
        match self {
            Self::Switch(device) => device.execute(command).await,
            Self::Light(device) => device.execute(command).await,
            Self::Oven(device) => device.execute(command).await,
        }
    }
}

impl<H> From<Switch<H>> for Appliance<H> {
    fn from(device: Switch<H>) -> Self {
        Self::Switch(device)
    }
}

impl<H> From<Light<H>> for Appliance<H> {
    fn from(device: Light<H>) -> Self {
        Self::Light(device)
    }
}

impl<H> From<Oven> for Appliance<H> {
    fn from(device: Oven) -> Self {
        Self::Oven(device)
    }
}
