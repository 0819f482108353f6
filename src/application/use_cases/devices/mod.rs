//! Device Use Cases
//!
//! Business logic for managing devices attached to gateways.

mod create_device;
mod delete_device;
mod get_device_by_id;
mod list_devices;
mod update_device;

pub use create_device::{CreateDeviceCommand, CreateDeviceUseCase};
pub use delete_device::DeleteDeviceUseCase;
pub use get_device_by_id::GetDeviceByIdUseCase;
pub use list_devices::ListDevicesUseCase;
pub use update_device::{UpdateDeviceCommand, UpdateDeviceUseCase};

use crate::domain::models::device::MAX_DEVICES_PER_GATEWAY;
use crate::domain::models::gateway::GatewayId;
use crate::domain::ports::{DeviceRepository, GatewayRepository};
use crate::shared::errors::{DomainError, UseCaseError};

pub(crate) const INVALID_GATEWAY_UUID: &str = "Invalid gateway UUID (required).";
pub(crate) const INVALID_VENDOR: &str = "Invalid device vendor (required).";
pub(crate) const INVALID_STATUS: &str = "Invalid device status (online|offline).";

/// Check that a gateway exists and still has room for one more device.
///
/// Callers hold the gateway's lock so the result stays valid until their write.
async fn ensure_gateway_accepts_device(
    gateway_repository: &dyn GatewayRepository,
    device_repository: &dyn DeviceRepository,
    gateway_id: &GatewayId,
) -> Result<(), UseCaseError> {
    if gateway_repository.get_gateway(gateway_id).await?.is_none() {
        tracing::warn!(gateway_id = %gateway_id, "Referenced gateway does not exist");
        return Err(DomainError::GatewayNotFound(gateway_id.to_string()).into());
    }

    let count = device_repository.count_devices_by_gateway(gateway_id).await?;
    if count >= MAX_DEVICES_PER_GATEWAY {
        tracing::warn!(gateway_id = %gateway_id, count, "Gateway device limit reached");
        return Err(DomainError::DeviceLimitExceeded {
            gateway: gateway_id.to_string(),
            limit: MAX_DEVICES_PER_GATEWAY,
        }
        .into());
    }

    Ok(())
}
