//! Get Device By ID Use Case

use std::sync::Arc;

use crate::domain::models::device::{Device, DeviceId};
use crate::domain::ports::DeviceRepository;
use crate::shared::errors::UseCaseError;

/// Use case for getting a device by ID
pub struct GetDeviceByIdUseCase {
    device_repository: Arc<dyn DeviceRepository>,
}

impl GetDeviceByIdUseCase {
    /// Create a new GetDeviceByIdUseCase
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
    pub async fn execute(&self, id: DeviceId) -> Result<Device, UseCaseError> {
        tracing::debug!(device_id = %id, "Getting device by ID");

        self.device_repository.get_device(id).await?.ok_or_else(|| {
            tracing::warn!(device_id = %id, "Device not found");
            UseCaseError::NotFound {
                resource: "Device",
                id: id.to_string(),
            }
        })
    }
}
