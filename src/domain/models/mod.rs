//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod device;
pub mod gateway;

pub use device::{Device, DeviceId, DeviceStatus, NewDevice, UpdateDeviceData, MAX_DEVICES_PER_GATEWAY};
pub use gateway::{Gateway, GatewayDetails, GatewayId, UpdateGatewayData};
