//! Delete Gateway Use Case
//!
//! Removes a gateway. Devices referencing it are left in place.

use std::sync::Arc;

use crate::application::gateway_locks::GatewayLocks;
use crate::domain::models::gateway::GatewayId;
use crate::domain::ports::GatewayRepository;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a gateway
pub struct DeleteGatewayUseCase {
    gateway_repository: Arc<dyn GatewayRepository>,
    gateway_locks: Arc<GatewayLocks>,
}

impl DeleteGatewayUseCase {
    /// Create a new DeleteGatewayUseCase
    #[must_use]
    pub fn new(gateway_repository: Arc<dyn GatewayRepository>, gateway_locks: Arc<GatewayLocks>) -> Self {
        Self {
            gateway_repository,
            gateway_locks,
        }
    }

    /// Execute the use case
    ///
    /// Waits for any device write that is attaching to this gateway.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the gateway doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &GatewayId) -> Result<(), UseCaseError> {
        tracing::info!(gateway_id = %id, "Deleting gateway");

        let _guard = self.gateway_locks.acquire(id).await;
        let deleted = self.gateway_repository.delete_gateway(id).await?;

        if !deleted {
            tracing::warn!(gateway_id = %id, "Gateway not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Gateway",
                id: id.to_string(),
            });
        }

        tracing::info!(gateway_id = %id, "Gateway deleted successfully");
        Ok(())
    }
}
