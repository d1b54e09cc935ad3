//! # homelink-domain
//!
//! Pure domain model for the homelink device bridge.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions
//! - Define **discovery descriptors** (what a device reports during SYNC)
//! - Define **state snapshots** (what a device reports during QUERY)
//! - Define **commands** (typed execution vocabulary parsed off the wire)
//! - Define **intent payloads** (request/response bodies for the four
//!   assistant-platform intents)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod device;
pub mod error;
pub mod id;
pub mod intent;
pub mod state;
