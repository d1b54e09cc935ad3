//! GPIO adapter configuration.

use serde::Deserialize;

/// Configuration for the sysfs GPIO sink.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GpioConfig {
    /// Base directory of the sysfs GPIO interface.
    pub base_path: String,
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self {
            base_path: "/sys/class/gpio".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_sysfs_class_gpio() {
        let config = GpioConfig::default();
        assert_eq!(config.base_path, "/sys/class/gpio");
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"base_path = "/tmp/gpio""#;
        let config: GpioConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_path, "/tmp/gpio");
    }

    #[test]
    fn should_use_default_for_missing_fields() {
        let config: GpioConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_path, "/sys/class/gpio");
    }
}
