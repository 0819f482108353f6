//! Ports
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod device_repository;
pub mod gateway_repository;

pub use device_repository::DeviceRepository;
pub use gateway_repository::GatewayRepository;
