//! Delete Device Use Case

use std::sync::Arc;

use crate::domain::models::device::DeviceId;
use crate::domain::ports::DeviceRepository;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a device
pub struct DeleteDeviceUseCase {
    device_repository: Arc<dyn DeviceRepository>,
}

impl DeleteDeviceUseCase {
    /// Create a new DeleteDeviceUseCase
    #[must_use]
    pub fn new(device_repository: Arc<dyn DeviceRepository>) -> Self {
        Self { device_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the device doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: DeviceId) -> Result<(), UseCaseError> {
        tracing::info!(device_id = %id, "Deleting device");

        if !self.device_repository.delete_device(id).await? {
            tracing::warn!(device_id = %id, "Device not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Device",
                id: id.to_string(),
            });
        }

        tracing::info!(device_id = %id, "Device deleted successfully");
        Ok(())
    }
}
