//! Get Gateway By ID Use Case
//!
//! Retrieves a single gateway with its devices.

use std::sync::Arc;

use crate::domain::models::gateway::{GatewayDetails, GatewayId};
use crate::domain::ports::{DeviceRepository, GatewayRepository};
use crate::shared::errors::UseCaseError;

/// Use case for getting a gateway by ID
pub struct GetGatewayByIdUseCase {
    gateway_repository: Arc<dyn GatewayRepository>,
    device_repository: Arc<dyn DeviceRepository>,
}

impl GetGatewayByIdUseCase {
    /// Create a new GetGatewayByIdUseCase
    #[must_use]
    pub fn new(gateway_repository: Arc<dyn GatewayRepository>, device_repository: Arc<dyn DeviceRepository>) -> Self {
        Self {
            gateway_repository,
            device_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the gateway doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &GatewayId) -> Result<GatewayDetails, UseCaseError> {
        tracing::debug!(gateway_id = %id, "Getting gateway by ID");

        let gateway = self.gateway_repository.get_gateway(id).await?.ok_or_else(|| {
            tracing::warn!(gateway_id = %id, "Gateway not found");
            UseCaseError::NotFound {
                resource: "Gateway",
                id: id.to_string(),
            }
        })?;

        let devices = self.device_repository.list_devices_by_gateway(id).await?;

        Ok(GatewayDetails { gateway, devices })
    }
}
