//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod devices;
pub mod gateways;

#[cfg(test)]
pub(crate) mod test_support;

pub use devices::{
    CreateDeviceUseCase, DeleteDeviceUseCase, GetDeviceByIdUseCase, ListDevicesUseCase, UpdateDeviceUseCase,
};
pub use gateways::{
    CreateGatewayUseCase, DeleteGatewayUseCase, GetGatewayByIdUseCase, ListGatewaysUseCase, UpdateGatewayUseCase,
};
