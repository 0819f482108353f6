//! Gateway Handlers
//!
//! HTTP handlers for gateway CRUD operations.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    routing::get,
    Json, Router,
};

use crate::domain::models::gateway::GatewayId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateGatewayDto, CreatedGatewayDto, GatewayResponseDto, MessageDto, UpdateGatewayDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

const MALFORMED_UUID: &str = "Incorrect or missing gateway UUID.";

/// Create the router for gateway endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gateways).post(create_gateway))
        .route(
            "/:uuid",
            get(get_gateway_by_id).put(update_gateway).delete(delete_gateway),
        )
}

fn parse_gateway_id(raw: &str) -> Result<GatewayId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::MalformedIdentifier(MALFORMED_UUID.to_string()))
}

/// GET /gateways - List gateways with their devices
///
/// # Responses
///
/// * 200 OK - Array of gateways, each with nested devices
#[axum::debug_handler]
async fn list_gateways(State(state): State<AppState>) -> Result<Json<Vec<GatewayResponseDto>>, ApiError> {
    let gateways = state.list_gateways_use_case.execute().await?;

    let response: Vec<GatewayResponseDto> = gateways.into_iter().map(GatewayResponseDto::from).collect();
    Ok(Json(response))
}

/// POST /gateways - Create a new gateway
///
/// # Responses
///
/// * 201 Created - Gateway created, `Location` header points at it
/// * 422 Unprocessable Entity - Missing or invalid name/IPv4
#[axum::debug_handler]
async fn create_gateway(
    State(state): State<AppState>,
    payload: Result<Json<CreateGatewayDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatedGatewayDto>), ApiError> {
    let Json(dto) = payload?;

    let gateway = state.create_gateway_use_case.execute(dto.into()).await?;

    let uuid = gateway.id().to_string();
    let location = state.config.location(&format!("/gateways/{uuid}"));

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedGatewayDto {
            uuid,
            msg: "Gateway added successfully.".to_string(),
        }),
    ))
}

/// GET /gateways/:uuid - Get a gateway with its devices
///
/// # Responses
///
/// * 200 OK - Gateway found
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Gateway does not exist
#[axum::debug_handler]
async fn get_gateway_by_id(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<GatewayResponseDto>, ApiError> {
    let gateway_id = parse_gateway_id(&uuid)?;

    let details = state.get_gateway_by_id_use_case.execute(&gateway_id).await?;

    Ok(Json(GatewayResponseDto::from(details)))
}

/// PUT /gateways/:uuid - Partial update of a gateway
///
/// # Responses
///
/// * 200 OK - Gateway updated; absent fields keep their value
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Gateway does not exist
/// * 422 Unprocessable Entity - Supplied name/IPv4 invalid
#[axum::debug_handler]
async fn update_gateway(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
    payload: Result<Json<UpdateGatewayDto>, JsonRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let gateway_id = parse_gateway_id(&uuid)?;
    let Json(dto) = payload?;

    state
        .update_gateway_use_case
        .execute(&gateway_id, dto.into())
        .await?;

    Ok(Json(MessageDto::new("Gateway updated successfully.")))
}

/// DELETE /gateways/:uuid - Delete a gateway
///
/// Devices referencing the gateway are left untouched.
///
/// # Responses
///
/// * 200 OK - Gateway deleted
/// * 400 Bad Request - Malformed UUID
/// * 404 Not Found - Gateway does not exist
#[axum::debug_handler]
async fn delete_gateway(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Json<MessageDto>, ApiError> {
    let gateway_id = parse_gateway_id(&uuid)?;

    state.delete_gateway_use_case.execute(&gateway_id).await?;

    Ok(Json(MessageDto::new("Gateway deleted successfully.")))
}
