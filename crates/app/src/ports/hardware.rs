//! Hardware output port — binary-output sink for devices with a physical pin.

use homelink_domain::error::HardwareError;

/// Writes a binary level to a hardware output channel.
///
/// The write is synchronous and best-effort: device logic treats a failure
/// as fatal to the current execute call, surfacing it as a generic error.
pub trait HardwareOutput {
    /// Drive `channel` high (`true`) or low (`false`).
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError`] when the underlying sink cannot be written.
    fn write(&self, channel: u8, level: bool) -> Result<(), HardwareError>;
}

impl<T: HardwareOutput> HardwareOutput for std::sync::Arc<T> {
    fn write(&self, channel: u8, level: bool) -> Result<(), HardwareError> {
        (**self).write(channel, level)
    }
}
