//! Gateway DTOs
//!
//! Data transfer objects for gateway API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{present, present_text, text};
use crate::application::use_cases::gateways::{CreateGatewayCommand, UpdateGatewayCommand};
use crate::domain::models::device::{Device, DeviceStatus};
use crate::domain::models::gateway::GatewayDetails;

/// DTO for creating a new gateway
///
/// Fields stay raw JSON here; presence, type and format are checked by the use case.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGatewayDto {
    pub name: Option<Value>,
    pub ipv4: Option<Value>,
}

impl From<CreateGatewayDto> for CreateGatewayCommand {
    fn from(dto: CreateGatewayDto) -> Self {
        Self {
            name: text(dto.name),
            ipv4: text(dto.ipv4),
        }
    }
}

/// DTO for partial gateway update (PUT)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGatewayDto {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<Value>>,

    #[serde(default, deserialize_with = "present")]
    pub ipv4: Option<Option<Value>>,
}

impl From<UpdateGatewayDto> for UpdateGatewayCommand {
    fn from(dto: UpdateGatewayDto) -> Self {
        Self {
            name: present_text(dto.name),
            ipv4: present_text(dto.ipv4),
        }
    }
}

/// Response body after creating a gateway
#[derive(Debug, Clone, Serialize)]
pub struct CreatedGatewayDto {
    pub uuid: String,
    pub msg: String,
}

/// Device as nested inside a gateway response (no parent reference)
#[derive(Debug, Clone, Serialize)]
pub struct GatewayDeviceDto {
    pub uid: i64,
    pub vendor: String,
    pub created: DateTime<Utc>,
    pub status: DeviceStatus,
}

impl From<Device> for GatewayDeviceDto {
    fn from(device: Device) -> Self {
        Self {
            uid: device.id().as_i64(),
            vendor: device.vendor().to_string(),
            created: device.created(),
            status: device.status(),
        }
    }
}

/// Gateway response DTO
#[derive(Debug, Clone, Serialize)]
pub struct GatewayResponseDto {
    pub uuid: String,
    pub name: String,
    pub ipv4: String,
    pub created: DateTime<Utc>,
    pub devices: Vec<GatewayDeviceDto>,
}

impl From<GatewayDetails> for GatewayResponseDto {
    fn from(details: GatewayDetails) -> Self {
        let GatewayDetails { gateway, devices } = details;
        Self {
            uuid: gateway.id().to_string(),
            name: gateway.name().to_string(),
            ipv4: gateway.ipv4().to_string(),
            created: gateway.created(),
            devices: devices.into_iter().map(GatewayDeviceDto::from).collect(),
        }
    }
}
