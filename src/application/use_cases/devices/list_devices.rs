//! List Devices Use Case

use std::sync::Arc;

use crate::domain::models::device::Device;
use crate::domain::ports::DeviceRepository;
use crate::shared::errors::UseCaseError;

/// Use case for listing all devices
pub struct ListDevicesUseCase {
    device_repository: Arc<dyn DeviceRepository>,
}

impl ListDevicesUseCase {
    /// Create a new ListDevicesUseCase
    #[must_use]
    pub fn new(device_repository: Arc<dyn DeviceRepository>) -> Self {
        Self { device_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Device>, UseCaseError> {
        tracing::debug!("Listing devices");

        let devices = self.device_repository.list_devices().await?;

        tracing::debug!(count = devices.len(), "Found devices");
        Ok(devices)
    }
}
