//! # homelink-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the smart-home **fulfillment endpoint** (`POST /smarthome`):
//!   unwrap the `{requestId, inputs}` envelope, dispatch the intent to the
//!   application service, and wrap the result back into
//!   `{requestId, payload}`
//! - Map malformed envelopes into JSON error responses
//!
//! ## Dependency rule
//! Depends on `homelink-app` (for the intent service and port traits) and
//! `homelink-domain` (for payload types). Never leaks axum types into the
//! domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
