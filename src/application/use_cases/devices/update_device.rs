//! Update Device Use Case
//!
//! Partially updates a device. Supplying `gateway_uuid` always re-checks the
//! target gateway's existence and device limit, even when it names the
//! device's current gateway.

use std::sync::Arc;

use crate::application::gateway_locks::GatewayLocks;
use crate::domain::models::device::{DeviceId, DeviceStatus, UpdateDeviceData};
use crate::domain::models::gateway::GatewayId;
use crate::domain::ports::{DeviceRepository, GatewayRepository};
use crate::shared::errors::UseCaseError;
use crate::shared::validation::validate_name;

use super::{ensure_gateway_accepts_device, INVALID_GATEWAY_UUID, INVALID_STATUS, INVALID_VENDOR};

/// Unvalidated partial update.
///
/// The outer `Option` records whether the field was present in the request;
/// a present `null` is `Some(None)` and fails validation.
#[derive(Debug, Clone, Default)]
pub struct UpdateDeviceCommand {
    pub vendor: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub gateway_uuid: Option<Option<String>>,
}

/// Use case for partial device update
pub struct UpdateDeviceUseCase {
    gateway_repository: Arc<dyn GatewayRepository>,
    device_repository: Arc<dyn DeviceRepository>,
    gateway_locks: Arc<GatewayLocks>,
}

impl UpdateDeviceUseCase {
    /// Create a new UpdateDeviceUseCase
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
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the device doesn't exist.
    /// Returns `UseCaseError::Validation` if a supplied field is invalid.
    /// Returns `UseCaseError::Domain` if the target gateway doesn't exist or is full.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: DeviceId, command: UpdateDeviceCommand) -> Result<(), UseCaseError> {
        tracing::info!(device_id = %id, "Updating device");

        let existing = self.device_repository.get_device(id).await?.ok_or_else(|| {
            tracing::warn!(device_id = %id, "Device not found for update");
            UseCaseError::NotFound {
                resource: "Device",
                id: id.to_string(),
            }
        })?;

        let mut data = UpdateDeviceData::default();

        if let Some(vendor) = command.vendor {
            validate_name(vendor.as_deref()).map_err(|e| UseCaseError::invalid_field(&e, INVALID_VENDOR))?;
            data.vendor = vendor;
        }

        if let Some(status) = command.status {
            let status = status
                .as_deref()
                .unwrap_or_default()
                .parse::<DeviceStatus>()
                .map_err(|e| UseCaseError::invalid_field(&e, INVALID_STATUS))?;
            data.status = Some(status);
        }

        let _guard = match command.gateway_uuid {
            Some(raw) => {
                let gateway_id = raw
                    .as_deref()
                    .unwrap_or_default()
                    .parse::<GatewayId>()
                    .map_err(|e| UseCaseError::invalid_field(&e, INVALID_GATEWAY_UUID))?;

                let guard = self.gateway_locks.acquire(&gateway_id).await;
                ensure_gateway_accepts_device(
                    self.gateway_repository.as_ref(),
                    self.device_repository.as_ref(),
                    &gateway_id,
                )
                .await?;

                data.gateway_id = Some(gateway_id);
                Some(guard)
            }
            None => None,
        };

        let updated = existing.with_updates(data);

        if !self.device_repository.update_device(&updated).await? {
            return Err(UseCaseError::NotFound {
                resource: "Device",
                id: id.to_string(),
            });
        }

        tracing::info!(device_id = %id, gateway_id = %updated.gateway_id(), "Device updated successfully");
        Ok(())
    }
}
