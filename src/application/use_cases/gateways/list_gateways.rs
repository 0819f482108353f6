//! List Gateways Use Case
//!
//! Retrieves every gateway together with the devices attached to it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::models::device::Device;
use crate::domain::models::gateway::{GatewayDetails, GatewayId};
use crate::domain::ports::{DeviceRepository, GatewayRepository};
use crate::shared::errors::UseCaseError;

/// Use case for listing all gateways with their devices
pub struct ListGatewaysUseCase {
    gateway_repository: Arc<dyn GatewayRepository>,
    device_repository: Arc<dyn DeviceRepository>,
}

impl ListGatewaysUseCase {
    /// Create a new ListGatewaysUseCase
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
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<GatewayDetails>, UseCaseError> {
        tracing::debug!("Listing gateways");

        let gateways = self.gateway_repository.list_gateways().await?;

        let mut devices_by_gateway: HashMap<GatewayId, Vec<Device>> = HashMap::new();
        for device in self.device_repository.list_devices().await? {
            devices_by_gateway
                .entry(device.gateway_id().clone())
                .or_default()
                .push(device);
        }

        let details: Vec<GatewayDetails> = gateways
            .into_iter()
            .map(|gateway| {
                let devices = devices_by_gateway.remove(gateway.id()).unwrap_or_default();
                GatewayDetails { gateway, devices }
            })
            .collect();

        tracing::debug!(count = details.len(), "Found gateways");
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::test_support::InMemoryRepository;

    #[tokio::test]
    async fn should_return_empty_list() {
        let repo = InMemoryRepository::new();
        let use_case = ListGatewaysUseCase::new(repo.clone(), repo);

        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_attach_devices_to_their_gateway() {
        let repo = InMemoryRepository::new();
        let first = repo.seed_gateway("server1", "10.0.0.1");
        let second = repo.seed_gateway("server2", "10.0.0.2");
        repo.seed_devices(first.id(), 3);
        repo.seed_devices(second.id(), 1);

        let use_case = ListGatewaysUseCase::new(repo.clone(), repo);
        let details = use_case.execute().await.unwrap();

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].gateway.id(), first.id());
        assert_eq!(details[0].devices.len(), 3);
        assert_eq!(details[1].devices.len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_repository_errors() {
        let repo = InMemoryRepository::new();
        repo.fail_all();

        let use_case = ListGatewaysUseCase::new(repo.clone(), repo);
        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
