//! # homelink-adapter-gpio
//!
//! Hardware output adapter backed by the Linux sysfs GPIO interface:
//! each write drives `<base>/gpio<N>/value` with `"1"` or `"0"`.

pub mod config;

pub use config::GpioConfig;

use std::path::PathBuf;

use homelink_app::ports::HardwareOutput;
use homelink_domain::error::HardwareError;

/// Sysfs-backed GPIO sink.
///
/// The channel-to-pin association is fixed configuration: the channel
/// number *is* the exported GPIO number under `base`.
#[derive(Debug, Clone)]
pub struct SysfsGpio {
    base: PathBuf,
}

impl SysfsGpio {
    /// Create a sink rooted at the given sysfs base directory.
    #[must_use]
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Create a sink from configuration.
    #[must_use]
    pub fn from_config(config: &GpioConfig) -> Self {
        Self::new(config.base_path.clone())
    }

    fn value_path(&self, channel: u8) -> PathBuf {
        self.base.join(format!("gpio{channel}")).join("value")
    }
}

impl HardwareOutput for SysfsGpio {
    fn write(&self, channel: u8, level: bool) -> Result<(), HardwareError> {
        let path = self.value_path(channel);
        let value = if level { "1" } else { "0" };
        tracing::debug!(path = %path.display(), value, "gpio write");
        std::fs::write(&path, value).map_err(|source| HardwareError { channel, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("homelink-gpio-tests")
            .join(format!("{name}-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("gpio0")).unwrap();
        dir
    }

    #[test]
    fn should_write_one_for_high_level() {
        let dir = scratch_dir("high");
        let gpio = SysfsGpio::new(&dir);

        gpio.write(0, true).unwrap();

        let value = std::fs::read_to_string(dir.join("gpio0").join("value")).unwrap();
        assert_eq!(value, "1");
    }

    #[test]
    fn should_write_zero_for_low_level() {
        let dir = scratch_dir("low");
        let gpio = SysfsGpio::new(&dir);

        gpio.write(0, false).unwrap();

        let value = std::fs::read_to_string(dir.join("gpio0").join("value")).unwrap();
        assert_eq!(value, "0");
    }

    #[test]
    fn should_overwrite_previous_level() {
        let dir = scratch_dir("overwrite");
        let gpio = SysfsGpio::new(&dir);

        gpio.write(0, true).unwrap();
        gpio.write(0, false).unwrap();

        let value = std::fs::read_to_string(dir.join("gpio0").join("value")).unwrap();
        assert_eq!(value, "0");
    }

    #[test]
    fn should_surface_missing_channel_as_hardware_error() {
        let dir = scratch_dir("missing");
        let gpio = SysfsGpio::new(&dir);

        let err = gpio.write(7, true).unwrap_err();

        assert_eq!(err.channel, 7);
        assert_eq!(err.to_string(), "hardwareError");
    }
}
