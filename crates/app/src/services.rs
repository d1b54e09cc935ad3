//! Application services — one use-case struct per driving port.

pub mod intent_service;

pub use intent_service::IntentService;
