//! Gateway Domain Model
//!
//! Represents a network gateway, the parent resource devices attach to.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::ValidationError;

use super::device::Device;
use crate::shared::validation::validate_uuid;

/// Newtype wrapper for Gateway ID providing type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GatewayId(Uuid);

impl GatewayId {
    /// Create a new random GatewayId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a GatewayId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GatewayId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GatewayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for GatewayId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Parses only the canonical lowercase hyphenated form; braces, URNs,
/// uppercase and unhyphenated text are rejected.
impl FromStr for GatewayId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        validate_uuid(Some(value))?;
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| ValidationError::new("uuid"))
    }
}

/// Data for updating an existing Gateway (absent fields keep their value)
#[derive(Debug, Clone, Default)]
pub struct UpdateGatewayData {
    pub name: Option<String>,
    pub ipv4: Option<String>,
}

/// Gateway domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Gateway {
    id: GatewayId,
    name: String,
    ipv4: String,
    created: DateTime<Utc>,
}

impl Gateway {
    /// Create a new Gateway stamped with the current time
    #[must_use]
    pub fn new(id: GatewayId, name: String, ipv4: String) -> Self {
        Self {
            id,
            name,
            ipv4,
            created: Utc::now(),
        }
    }

    /// Restore a Gateway from persisted data
    #[must_use]
    pub fn restore(id: GatewayId, name: String, ipv4: String, created: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            ipv4,
            created,
        }
    }

    /// Apply updates to the gateway, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateGatewayData) -> Self {
        Self {
            name: data.name.unwrap_or(self.name),
            ipv4: data.ipv4.unwrap_or(self.ipv4),
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> &GatewayId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ipv4(&self) -> &str {
        &self.ipv4
    }

    #[must_use]
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

/// A gateway together with the devices referencing it
#[derive(Debug, Clone)]
pub struct GatewayDetails {
    pub gateway: Gateway,
    pub devices: Vec<Device>,
}
