//! Driving Adapters
//!
//! Entry points that call into the use cases. The only one is the axum
//! REST API for gateways and devices.

pub mod api_rest;
