//! Application Layer
//!
//! Contains use cases that orchestrate business logic.
//! Use cases depend on domain ports (abstractions), not concrete implementations.

pub mod gateway_locks;
pub mod identifiers;
pub mod use_cases;

pub use gateway_locks::GatewayLocks;
pub use identifiers::GatewayIdGenerator;
