//! Create Device Use Case
//!
//! Attaches a new device to an existing gateway, enforcing the per-gateway
//! device limit.

use std::sync::Arc;

use crate::application::gateway_locks::GatewayLocks;
use crate::domain::models::device::{DeviceId, DeviceStatus, NewDevice};
use crate::domain::models::gateway::GatewayId;
use crate::domain::ports::{DeviceRepository, GatewayRepository};
use crate::shared::errors::UseCaseError;
use crate::shared::validation::validate_name;

use super::{ensure_gateway_accepts_device, INVALID_GATEWAY_UUID, INVALID_STATUS, INVALID_VENDOR};

/// Unvalidated input for device creation.
///
/// `status` distinguishes an absent field (`None`, defaults to offline) from
/// a present `null` (`Some(None)`, rejected).
#[derive(Debug, Clone, Default)]
pub struct CreateDeviceCommand {
    pub vendor: Option<String>,
    pub status: Option<Option<String>>,
    pub gateway_uuid: Option<String>,
}

/// Use case for creating a new device
pub struct CreateDeviceUseCase {
    gateway_repository: Arc<dyn GatewayRepository>,
    device_repository: Arc<dyn DeviceRepository>,
    gateway_locks: Arc<GatewayLocks>,
}

impl CreateDeviceUseCase {
    /// Create a new CreateDeviceUseCase
    #[must_use]
    pub fn new(
        gateway_repository: Arc<dyn GatewayRepository>,
        device_repository: Arc<dyn DeviceRepository>,
        gateway_locks: Arc<GatewayLocks>,
    ) -> Self {
        Self {
            gateway_repository,
            device_repository,
            gateway_locks,
        }
    }

    /// Execute the use case
    ///
    /// Checks run in a fixed order: gateway UUID format, gateway existence,
    /// device limit, vendor, status.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the gateway UUID, vendor or status is invalid.
    /// Returns `UseCaseError::Domain` if the gateway doesn't exist or is full.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, command: CreateDeviceCommand) -> Result<DeviceId, UseCaseError> {
        let gateway_id = command
            .gateway_uuid
            .as_deref()
            .unwrap_or_default()
            .parse::<GatewayId>()
            .map_err(|e| UseCaseError::invalid_field(&e, INVALID_GATEWAY_UUID))?;

        tracing::info!(gateway_id = %gateway_id, "Creating new device");

        let _guard = self.gateway_locks.acquire(&gateway_id).await;

        ensure_gateway_accepts_device(
            self.gateway_repository.as_ref(),
            self.device_repository.as_ref(),
            &gateway_id,
        )
        .await?;

        validate_name(command.vendor.as_deref()).map_err(|e| UseCaseError::invalid_field(&e, INVALID_VENDOR))?;
        let vendor = command.vendor.unwrap_or_default();

        let status = match command.status {
            None => DeviceStatus::default(),
            Some(raw) => raw
                .as_deref()
                .unwrap_or_default()
                .parse::<DeviceStatus>()
                .map_err(|e| UseCaseError::invalid_field(&e, INVALID_STATUS))?,
        };

        let id = self
            .device_repository
            .insert_device(&NewDevice::new(vendor, status, gateway_id.clone()))
            .await?;

        tracing::info!(device_id = %id, gateway_id = %gateway_id, "Device created successfully");
        Ok(id)
    }
}
