//! Domain Layer
//!
//! Contains the core business logic, domain models, and port traits.
//! This layer has no dependencies on infrastructure.

pub mod models;
pub mod ports;

pub use models::device::{Device, DeviceId, DeviceStatus, NewDevice, UpdateDeviceData};
pub use models::gateway::{Gateway, GatewayDetails, GatewayId, UpdateGatewayData};
pub use ports::{DeviceRepository, GatewayRepository};
