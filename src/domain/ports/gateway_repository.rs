//! Gateway Repository Port
//!
//! Abstract trait defining the contract for gateway persistence operations.

use async_trait::async_trait;

use crate::domain::models::gateway::{Gateway, GatewayId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Gateway persistence operations
#[async_trait]
pub trait GatewayRepository: Send + Sync {
    /// List every gateway in insertion order
    async fn list_gateways(&self) -> Result<Vec<Gateway>, RepositoryError>;

    /// Find a gateway by its ID
    async fn get_gateway(&self, id: &GatewayId) -> Result<Option<Gateway>, RepositoryError>;

    /// Insert a new gateway.
    ///
    /// Returns `RepositoryError::Duplicate` if the ID is already taken.
    async fn insert_gateway(&self, gateway: &Gateway) -> Result<(), RepositoryError>;

    /// Persist name and IPv4 of an existing gateway, returning whether a row changed
    async fn update_gateway(&self, gateway: &Gateway) -> Result<bool, RepositoryError>;

    /// Delete a gateway, returning whether a row was removed
    async fn delete_gateway(&self, id: &GatewayId) -> Result<bool, RepositoryError>;
}
