//! # homelink-app
//!
//! Application layer — device state machines, intent dispatch, and **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `HardwareOutput` — binary-output sink for devices with a physical pin
//!   - `StateReporter` — best-effort state push to the upstream platform
//! - Own the **device variants** (Switch, Light, Oven) and their shared timer
//!   semantics behind one capability surface (`Appliance`)
//! - Hold the **device registry** — the fixed fleet, built once at startup
//! - Provide the **intent service** — sync/query/execute/disconnect dispatch
//!   with per-device error escalation
//! - Provide in-process infrastructure that needs no IO (`LogStateReporter`)
//!
//! ## Dependency rule
//! Depends on `homelink-domain` only (plus `tokio::sync`/`tokio::time` for
//! per-device locking and deferred timer actions). Never imports adapter
//! crates. Adapters depend on *this* crate, not the reverse.

pub mod devices;
pub mod ports;
pub mod registry;
pub mod reporter;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;
