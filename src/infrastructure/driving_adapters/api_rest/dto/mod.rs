//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod device;
pub mod gateway;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use device::{CreateDeviceDto, CreatedDeviceDto, DeviceResponseDto, UpdateDeviceDto};
pub use gateway::{CreateGatewayDto, CreatedGatewayDto, GatewayResponseDto, UpdateGatewayDto};

/// Body of responses that only carry a status message
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub msg: String,
}

impl MessageDto {
    #[must_use]
    pub fn new(msg: &str) -> Self {
        Self { msg: msg.to_string() }
    }
}

/// Deserializes a field that may be absent, `null`, or set.
///
/// Use with `#[serde(default)]`: an absent key stays `None`, while a present
/// key becomes `Some(value)` where `value` is `None` for an explicit `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Text of a string field; any other JSON type counts as missing.
///
/// Request fields are taken as raw JSON so that a wrongly typed value is
/// reported by the use case, in its check order and with its message.
fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

/// Like [`text`] for presence-tracking fields: a wrongly typed value stays
/// present but carries no usable text, the same as an explicit `null`.
fn present_text(value: Option<Option<Value>>) -> Option<Option<String>> {
    value.map(text)
}
