//! HTTP Handlers
//!
//! Route handlers for the gateway and device resources.

pub mod devices;
pub mod gateways;
