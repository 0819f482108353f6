//! Update Gateway Use Case
//!
//! Partially updates a gateway: only the fields present in the request are
//! validated and replaced.

use std::sync::Arc;

use crate::domain::models::gateway::{GatewayId, UpdateGatewayData};
use crate::domain::ports::GatewayRepository;
use crate::shared::errors::UseCaseError;
use crate::shared::validation::{validate_ipv4, validate_name};

use super::{INVALID_IPV4, INVALID_NAME};

/// Unvalidated partial update.
///
/// The outer `Option` records whether the field was present in the request;
/// a present `null` is `Some(None)` and fails validation.
#[derive(Debug, Clone, Default)]
pub struct UpdateGatewayCommand {
    pub name: Option<Option<String>>,
    pub ipv4: Option<Option<String>>,
}

/// Use case for partial gateway update
pub struct UpdateGatewayUseCase {
    gateway_repository: Arc<dyn GatewayRepository>,
}

impl UpdateGatewayUseCase {
    /// Create a new UpdateGatewayUseCase
    #[must_use]
    pub fn new(gateway_repository: Arc<dyn GatewayRepository>) -> Self {
        Self { gateway_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the gateway doesn't exist.
    /// Returns `UseCaseError::Validation` if a supplied field is invalid.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &GatewayId, command: UpdateGatewayCommand) -> Result<(), UseCaseError> {
        tracing::info!(gateway_id = %id, "Updating gateway");

        let existing = self.gateway_repository.get_gateway(id).await?.ok_or_else(|| {
            tracing::warn!(gateway_id = %id, "Gateway not found for update");
            UseCaseError::NotFound {
                resource: "Gateway",
                id: id.to_string(),
            }
        })?;

        let mut data = UpdateGatewayData::default();

        if let Some(name) = command.name {
            validate_name(name.as_deref()).map_err(|e| UseCaseError::invalid_field(&e, INVALID_NAME))?;
            data.name = name;
        }

        if let Some(ipv4) = command.ipv4 {
            validate_ipv4(ipv4.as_deref()).map_err(|e| UseCaseError::invalid_field(&e, INVALID_IPV4))?;
            data.ipv4 = ipv4;
        }

        let updated = existing.with_updates(data);

        if !self.gateway_repository.update_gateway(&updated).await? {
            return Err(UseCaseError::NotFound {
                resource: "Gateway",
                id: id.to_string(),
            });
        }

        tracing::info!(gateway_id = %id, "Gateway updated successfully");
        Ok(())
    }
}
