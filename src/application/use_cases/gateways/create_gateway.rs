//! Create Gateway Use Case
//!
//! Registers a new gateway under a freshly generated identifier.

use std::sync::Arc;

use crate::application::identifiers::GatewayIdGenerator;
use crate::domain::models::gateway::Gateway;
use crate::domain::ports::GatewayRepository;
use crate::shared::errors::{RepositoryError, UseCaseError};
use crate::shared::validation::{validate_ipv4, validate_name};

use super::{INVALID_IPV4, INVALID_NAME};

/// Bound on inserts rejected by the primary key before giving up
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Unvalidated input for gateway creation
#[derive(Debug, Clone, Default)]
pub struct CreateGatewayCommand {
    pub name: Option<String>,
    pub ipv4: Option<String>,
}

/// Use case for creating a new gateway
pub struct CreateGatewayUseCase {
    gateway_repository: Arc<dyn GatewayRepository>,
    id_generator: GatewayIdGenerator,
}

impl CreateGatewayUseCase {
    /// Create a new CreateGatewayUseCase
    #[must_use]
    pub fn new(gateway_repository: Arc<dyn GatewayRepository>) -> Self {
        let id_generator = GatewayIdGenerator::new(gateway_repository.clone());
        Self::with_id_generator(gateway_repository, id_generator)
    }

    /// Create a new CreateGatewayUseCase with a specific identifier generator
    #[must_use]
    pub fn with_id_generator(gateway_repository: Arc<dyn GatewayRepository>, id_generator: GatewayIdGenerator) -> Self {
        Self {
            gateway_repository,
            id_generator,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the name or IPv4 address is missing or invalid.
    /// Returns `UseCaseError::Internal` if no free identifier could be found.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, command: CreateGatewayCommand) -> Result<Gateway, UseCaseError> {
        validate_name(command.name.as_deref()).map_err(|e| UseCaseError::invalid_field(&e, INVALID_NAME))?;
        validate_ipv4(command.ipv4.as_deref()).map_err(|e| UseCaseError::invalid_field(&e, INVALID_IPV4))?;

        let name = command.name.unwrap_or_default();
        let ipv4 = command.ipv4.unwrap_or_default();

        tracing::info!(name = %name, ipv4 = %ipv4, "Creating new gateway");

        for _ in 0..MAX_INSERT_ATTEMPTS {
            let id = self.id_generator.new_gateway_id().await?;
            let gateway = Gateway::new(id, name.clone(), ipv4.clone());

            match self.gateway_repository.insert_gateway(&gateway).await {
                Ok(()) => {
                    tracing::info!(gateway_id = %gateway.id(), "Gateway created successfully");
                    return Ok(gateway);
                }
                // Another request claimed the same ID between check and insert.
                Err(RepositoryError::Duplicate(key)) => {
                    tracing::warn!(gateway_id = %key, "Gateway ID taken concurrently, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(UseCaseError::Internal(format!(
            "gateway insert kept colliding after {MAX_INSERT_ATTEMPTS} attempts"
        )))
    }
}
