//! Device DTOs
//!
//! Data transfer objects for device API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{present, present_text, text};
use crate::application::use_cases::devices::{CreateDeviceCommand, UpdateDeviceCommand};
use crate::domain::models::device::{Device, DeviceStatus};

/// DTO for creating a new device
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDeviceDto {
    pub vendor: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<Value>>,

    pub gateway_uuid: Option<Value>,
}

impl From<CreateDeviceDto> for CreateDeviceCommand {
    fn from(dto: CreateDeviceDto) -> Self {
        Self {
            vendor: text(dto.vendor),
            status: present_text(dto.status),
            gateway_uuid: text(dto.gateway_uuid),
        }
    }
}

/// DTO for partial device update (PUT)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDeviceDto {
    #[serde(default, deserialize_with = "present")]
    pub vendor: Option<Option<Value>>,

    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<Value>>,

    #[serde(default, deserialize_with = "present")]
    pub gateway_uuid: Option<Option<Value>>,
}

impl From<UpdateDeviceDto> for UpdateDeviceCommand {
    fn from(dto: UpdateDeviceDto) -> Self {
        Self {
            vendor: present_text(dto.vendor),
            status: present_text(dto.status),
            gateway_uuid: present_text(dto.gateway_uuid),
        }
    }
}

/// Response body after creating a device
#[derive(Debug, Clone, Serialize)]
pub struct CreatedDeviceDto {
    pub uid: i64,
    pub msg: String,
}

/// Device response DTO
#[derive(Debug, Clone, Serialize)]
pub struct DeviceResponseDto {
    pub uid: i64,
    pub vendor: String,
    pub status: DeviceStatus,
    pub gateway_uuid: String,
    pub created: DateTime<Utc>,
}

impl From<Device> for DeviceResponseDto {
    fn from(device: Device) -> Self {
        Self {
            uid: device.id().as_i64(),
            vendor: device.vendor().to_string(),
            status: device.status(),
            gateway_uuid: device.gateway_id().to_string(),
            created: device.created(),
        }
    }
}
