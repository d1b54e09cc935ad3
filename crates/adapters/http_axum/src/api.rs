//! JSON handlers for the fulfillment endpoint.

pub mod fulfillment;
