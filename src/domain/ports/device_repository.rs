//! Device Repository Port
//!
//! Abstract trait defining the contract for device persistence operations.
//! The repository does not check that the referenced gateway exists nor the
//! per-gateway device quota; use cases orchestrate those rules.

use async_trait::async_trait;

use crate::domain::models::device::{Device, DeviceId, NewDevice};
use crate::domain::models::gateway::GatewayId;
use crate::shared::errors::RepositoryError;

/// Repository trait for Device persistence operations
#[async_trait]
pub trait DeviceRepository: Send + Sync {
    /// List every device ordered by ID
    async fn list_devices(&self) -> Result<Vec<Device>, RepositoryError>;

    /// List the devices referencing a gateway
    async fn list_devices_by_gateway(&self, gateway_id: &GatewayId) -> Result<Vec<Device>, RepositoryError>;

    /// Count the devices referencing a gateway
    async fn count_devices_by_gateway(&self, gateway_id: &GatewayId) -> Result<i64, RepositoryError>;

    /// Find a device by its ID
    async fn get_device(&self, id: DeviceId) -> Result<Option<Device>, RepositoryError>;

    /// Insert a new device and return the store-assigned ID
    async fn insert_device(&self, device: &NewDevice) -> Result<DeviceId, RepositoryError>;

    /// Persist vendor, status and gateway of an existing device, returning whether a row changed
    async fn update_device(&self, device: &Device) -> Result<bool, RepositoryError>;

    /// Delete a device, returning whether a row was removed
    async fn delete_device(&self, id: DeviceId) -> Result<bool, RepositoryError>;
}
