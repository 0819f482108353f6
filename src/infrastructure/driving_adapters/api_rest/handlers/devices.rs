//! Device Handlers
//!
//! HTTP handlers for device CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};

use crate::domain::models::device::DeviceId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateDeviceDto, CreatedDeviceDto, DeviceResponseDto, MessageDto, UpdateDeviceDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

const MALFORMED_UID: &str = "Incorrect or missing device UID.";

/// Create the router for device endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_devices).post(create_device))
        .route(
            "/:uid",
            get(get_device_by_id).put(update_device).delete(delete_device),
        )
}

fn parse_device_id(raw: &str) -> Result<DeviceId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::MalformedIdentifier(MALFORMED_UID.to_string()))
}

/// GET /devices - List all devices
#[axum::debug_handler]
async fn list_devices(State(state): State<AppState>) -> Result<Json<Vec<DeviceResponseDto>>, ApiError> {
    let devices = state.list_devices_use_case.execute().await?;

    let response: Vec<DeviceResponseDto> = devices.into_iter().map(DeviceResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /devices - Attach a new device to a gateway
///
/// # Responses
///
/// * 201 Created - Device created, `Location` header points at it
/// * 409 Conflict - Gateway not found or device limit reached
/// * 422 Unprocessable Entity - Invalid gateway UUID, vendor or status
#[axum::debug_handler]
async fn create_device(
    State(state): State<AppState>,
    payload: Result<Json<CreateDeviceDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatedDeviceDto>), ApiError> {
    let Json(dto) = payload?;

    let id = state.create_device_use_case.execute(dto.into()).await?;

    let location = state.config.location(&format!("/devices/{id}"));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedDeviceDto {
            uid: id.as_i64(),
            msg: "Device added successfully.".to_string(),
        }),
    ))
}

/// GET /devices/:uid - Get a device
///
/// # Responses
///
/// * 200 OK - Device found
/// * 400 Bad Request - UID is not a positive integer without leading zeros
/// * 404 Not Found - Device does not exist
#[axum::debug_handler]
async fn get_device_by_id(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<DeviceResponseDto>, ApiError> {
    let device_id = parse_device_id(&uid)?;

    let device = state.get_device_by_id_use_case.execute(device_id).await?;

    Ok(Json(DeviceResponseDto::from(device)))
}

/// PUT /devices/:uid - Partial update of a device
///
/// # Responses
///
/// * 200 OK - Device updated; absent fields keep their value
/// * 400 Bad Request - Malformed UID
/// * 404 Not Found - Device does not exist
/// * 409 Conflict - Target gateway not found or full
/// * 422 Unprocessable Entity - Supplied field invalid
#[axum::debug_handler]
async fn update_device(
    State(state): State<AppState>,
    Path(uid): Path<String>,
    payload: Result<Json<UpdateDeviceDto>, JsonRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let device_id = parse_device_id(&uid)?;
    let Json(dto) = payload?;

    state.update_device_use_case.execute(device_id, dto.into()).await?;

    Ok(Json(MessageDto::new("Device updated successfully.")))
}

/// DELETE /devices/:uid - Delete a device
#[axum::debug_handler]
async fn delete_device(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    let device_id = parse_device_id(&uid)?;

    state.delete_device_use_case.execute(device_id).await?;

    Ok(Json(MessageDto::new("Device deleted successfully.")))
}
