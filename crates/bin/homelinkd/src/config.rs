//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homelink.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use homelink_adapter_gpio::GpioConfig;

/// Top-level configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Upstream agent settings.
    pub agent: AgentConfig,
    /// GPIO sink settings.
    pub gpio: GpioConfig,
    /// The fixed device fleet.
    pub devices: Vec<DeviceEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            agent: AgentConfig::default(),
            gpio: GpioConfig::default(),
            devices: default_fleet(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Upstream agent identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Agent user id reported to the platform.
    pub agent_user_id: String,
}

/// Kind tag for a configured device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Switch,
    Light,
    Oven,
}

/// One configured device.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceEntry {
    /// Device id, unique within the fleet.
    pub id: String,
    /// Device kind.
    pub kind: DeviceKind,
    /// Hardware channel; required for switches and lights.
    pub channel: Option<u8>,
}

fn default_fleet() -> Vec<DeviceEntry> {
    vec![
        DeviceEntry {
            id: "sw1".to_string(),
            kind: DeviceKind::Switch,
            channel: Some(0),
        },
        DeviceEntry {
            id: "sw2".to_string(),
            kind: DeviceKind::Switch,
            channel: Some(1),
        },
        DeviceEntry {
            id: "ov1".to_string(),
            kind: DeviceKind::Oven,
            channel: None,
        },
        DeviceEntry {
            id: "lh1".to_string(),
            kind: DeviceKind::Light,
            channel: Some(0),
        },
    ]
}

impl Config {
    /// Load configuration from `homelink.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homelink.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMELINK_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("HOMELINK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOMELINK_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("HOMELINK_AGENT_USER_ID") {
            self.agent.agent_user_id = val;
        }
        if let Ok(val) = std::env::var("HOMELINK_GPIO_BASE") {
            self.gpio.base_path = val;
        }
        if let Ok(val) = std::env::var("HOMELINK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        for device in &self.devices {
            let needs_channel =
                matches!(device.kind, DeviceKind::Switch | DeviceKind::Light);
            if needs_channel && device.channel.is_none() {
                return Err(ConfigError::Validation(format!(
                    "device {} requires a hardware channel",
                    device.id
                )));
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homelinkd=info,homelink=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            agent_user_id: "1234".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
