//! Gateway Use Cases
//!
//! Business logic for managing network gateways.

mod create_gateway;
mod delete_gateway;
mod get_gateway_by_id;
mod list_gateways;
mod update_gateway;

pub use create_gateway::{CreateGatewayCommand, CreateGatewayUseCase};
pub use delete_gateway::DeleteGatewayUseCase;
pub use get_gateway_by_id::GetGatewayByIdUseCase;
pub use list_gateways::ListGatewaysUseCase;
pub use update_gateway::{UpdateGatewayCommand, UpdateGatewayUseCase};

pub(crate) const INVALID_NAME: &str = "Invalid gateway name (required).";
pub(crate) const INVALID_IPV4: &str = "Invalid gateway IPv4 address (required).";
