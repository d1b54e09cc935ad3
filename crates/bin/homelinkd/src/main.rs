//! # homelinkd — homelink daemon
//!
//! Composition root that wires the adapters together and starts the bridge.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the GPIO sink and the device fleet
//! - Construct the intent service, injecting ports
//! - Build the axum router and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use homelink_adapter_gpio::SysfsGpio;
use homelink_adapter_http_axum::state::AppState;
use homelink_app::devices::{Appliance, Light, Oven, Switch};
use homelink_app::registry::DeviceRegistry;
use homelink_app::reporter::LogStateReporter;
use homelink_app::services::IntentService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError, DeviceKind};

fn build_fleet(config: &Config, gpio: &SysfsGpio) -> Result<Vec<Appliance<SysfsGpio>>, ConfigError> {
    config
        .devices
        .iter()
        .map(|entry| {
            let channel = || {
                entry.channel.ok_or_else(|| {
                    ConfigError::Validation(format!(
                        "device {} requires a hardware channel",
                        entry.id
                    ))
                })
            };
            Ok(match entry.kind {
                DeviceKind::Switch => {
                    Switch::new(entry.id.as_str(), channel()?, gpio.clone()).into()
                }
                DeviceKind::Light => Light::new(entry.id.as_str(), channel()?, gpio.clone()).into(),
                DeviceKind::Oven => Oven::new(entry.id.as_str()).into(),
            })
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Fleet
    let gpio = SysfsGpio::from_config(&config.gpio);
    let fleet = build_fleet(&config, &gpio)?;
    let registry = DeviceRegistry::new(fleet)?;

    // Services
    let intent_service = IntentService::new(
        registry,
        LogStateReporter,
        config.agent.agent_user_id.clone(),
    );

    // HTTP
    let state = AppState::new(intent_service);
    let app = homelink_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "homelinkd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
