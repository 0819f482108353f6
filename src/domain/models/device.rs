//! Device Domain Model
//!
//! Represents a device attached to exactly one gateway.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::ValidationError;

use super::gateway::GatewayId;
use crate::shared::validation::{validate_positive_int, validate_status};

/// Maximum number of devices a single gateway may own
pub const MAX_DEVICES_PER_GATEWAY: i64 = 10;

/// Store-assigned device identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(i64);

impl DeviceId {
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DeviceId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_positive_int(Some(value))?;
        value
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::new("positive_int"))
    }
}

/// Device connectivity status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    #[default]
    Offline,
}

impl DeviceStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_status(Some(value))?;
        match value {
            "online" => Ok(Self::Online),
            _ => Ok(Self::Offline),
        }
    }
}

/// Data required to insert a new Device; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewDevice {
    pub vendor: String,
    pub status: DeviceStatus,
    pub gateway_id: GatewayId,
    pub created: DateTime<Utc>,
}

impl NewDevice {
    #[must_use]
    pub fn new(vendor: String, status: DeviceStatus, gateway_id: GatewayId) -> Self {
        Self {
            vendor,
            status,
            gateway_id,
            created: Utc::now(),
        }
    }
}

/// Data for updating an existing Device (absent fields keep their value)
#[derive(Debug, Clone, Default)]
pub struct UpdateDeviceData {
    pub vendor: Option<String>,
    pub status: Option<DeviceStatus>,
    pub gateway_id: Option<GatewayId>,
}

/// Device domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    id: DeviceId,
    vendor: String,
    status: DeviceStatus,
    gateway_id: GatewayId,
    created: DateTime<Utc>,
}

impl Device {
    /// Restore a Device from persisted data
    #[must_use]
    pub fn restore(
        id: DeviceId,
        vendor: String,
        status: DeviceStatus,
        gateway_id: GatewayId,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            vendor,
            status,
            gateway_id,
            created,
        }
    }

    /// Apply updates to the device, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateDeviceData) -> Self {
        Self {
            vendor: data.vendor.unwrap_or(self.vendor),
            status: data.status.unwrap_or(self.status),
            gateway_id: data.gateway_id.unwrap_or(self.gateway_id),
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> DeviceId {
        self.id
    }

    #[must_use]
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    #[must_use]
    pub fn gateway_id(&self) -> &GatewayId {
        &self.gateway_id
    }

    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}
