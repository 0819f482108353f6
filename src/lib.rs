//! Gateway Registry API
//!
//! A REST service for managing network gateways and the devices attached to
//! them, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
