//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::gateway_locks::GatewayLocks;
use crate::application::use_cases::devices::{
    CreateDeviceUseCase, DeleteDeviceUseCase, GetDeviceByIdUseCase, ListDevicesUseCase, UpdateDeviceUseCase,
};
use crate::application::use_cases::gateways::{
    CreateGatewayUseCase, DeleteGatewayUseCase, GetGatewayByIdUseCase, ListGatewaysUseCase, UpdateGatewayUseCase,
};
use crate::domain::ports::{DeviceRepository, GatewayRepository};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_gateways_use_case: Arc<ListGatewaysUseCase>,
    pub create_gateway_use_case: Arc<CreateGatewayUseCase>,
    pub get_gateway_by_id_use_case: Arc<GetGatewayByIdUseCase>,
    pub update_gateway_use_case: Arc<UpdateGatewayUseCase>,
    pub delete_gateway_use_case: Arc<DeleteGatewayUseCase>,
    pub list_devices_use_case: Arc<ListDevicesUseCase>,
    pub create_device_use_case: Arc<CreateDeviceUseCase>,
    pub get_device_by_id_use_case: Arc<GetDeviceByIdUseCase>,
    pub update_device_use_case: Arc<UpdateDeviceUseCase>,
    pub delete_device_use_case: Arc<DeleteDeviceUseCase>,
}

impl AppState {
    /// Wire every use case against the given repositories
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        gateway_repository: Arc<dyn GatewayRepository>,
        device_repository: Arc<dyn DeviceRepository>,
    ) -> Self {
        let gateway_locks = Arc::new(GatewayLocks::new());

        Self {
            config,
            list_gateways_use_case: Arc::new(ListGatewaysUseCase::new(
                gateway_repository.clone(),
                device_repository.clone(),
            )),
            create_gateway_use_case: Arc::new(CreateGatewayUseCase::new(gateway_repository.clone())),
            get_gateway_by_id_use_case: Arc::new(GetGatewayByIdUseCase::new(
                gateway_repository.clone(),
                device_repository.clone(),
            )),
            update_gateway_use_case: Arc::new(UpdateGatewayUseCase::new(gateway_repository.clone())),
            delete_gateway_use_case: Arc::new(DeleteGatewayUseCase::new(
                gateway_repository.clone(),
                gateway_locks.clone(),
            )),
            list_devices_use_case: Arc::new(ListDevicesUseCase::new(device_repository.clone())),
            create_device_use_case: Arc::new(CreateDeviceUseCase::new(
                gateway_repository.clone(),
                device_repository.clone(),
                gateway_locks.clone(),
            )),
            get_device_by_id_use_case: Arc::new(GetDeviceByIdUseCase::new(device_repository.clone())),
            update_device_use_case: Arc::new(UpdateDeviceUseCase::new(
                gateway_repository,
                device_repository.clone(),
                gateway_locks,
            )),
            delete_device_use_case: Arc::new(DeleteDeviceUseCase::new(device_repository)),
        }
    }
}

/// Build the application router with tracing, request IDs and CORS
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/gateways", handlers::gateways::router())
        .nest("/devices", handlers::devices::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
