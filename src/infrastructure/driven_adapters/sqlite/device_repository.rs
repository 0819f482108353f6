//! SQLite Device Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::models::device::{Device, DeviceId, DeviceStatus, NewDevice};
use crate::domain::models::gateway::GatewayId;
use crate::domain::ports::DeviceRepository;
use crate::shared::errors::RepositoryError;

/// Database row representation for devices table
#[derive(Debug, sqlx::FromRow)]
struct DeviceRow {
    uid: i64,
    vendor: String,
    status: String,
    gateway_uuid: String,
    created: DateTime<Utc>,
}

impl TryFrom<DeviceRow> for Device {
    type Error = RepositoryError;

    fn try_from(row: DeviceRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<DeviceStatus>()
            .map_err(|_| RepositoryError::Mapping(format!("Invalid device status in store: {}", row.status)))?;
        let gateway_id = row
            .gateway_uuid
            .parse::<GatewayId>()
            .map_err(|_| RepositoryError::Mapping(format!("Invalid gateway uuid in store: {}", row.gateway_uuid)))?;

        Ok(Device::restore(
            DeviceId::from_i64(row.uid),
            row.vendor,
            status,
            gateway_id,
            row.created,
        ))
    }
}

/// SQLite implementation of DeviceRepository
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new SqliteDeviceRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeviceRepository for SqliteDeviceRepository {
    async fn list_devices(&self) -> Result<Vec<Device>, RepositoryError> {
        let rows = sqlx::query_as::<_, DeviceRow>(
            r#"
            SELECT uid, vendor, status, gateway_uuid, created
            FROM devices
            ORDER BY uid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Device::try_from).collect()
    }

    async fn list_devices_by_gateway(&self, gateway_id: &GatewayId) -> Result<Vec<Device>, RepositoryError> {
        let rows = sqlx::query_as::<_, DeviceRow>(
            r#"
            SELECT uid, vendor, status, gateway_uuid, created
            FROM devices
            WHERE gateway_uuid = ?1
            ORDER BY uid ASC
            "#,
        )
        .bind(gateway_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Device::try_from).collect()
    }

    async fn count_devices_by_gateway(&self, gateway_id: &GatewayId) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM devices WHERE gateway_uuid = ?1")
            .bind(gateway_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn get_device(&self, id: DeviceId) -> Result<Option<Device>, RepositoryError> {
        let row = sqlx::query_as::<_, DeviceRow>(
            r#"
            SELECT uid, vendor, status, gateway_uuid, created
            FROM devices
            WHERE uid = ?1
            LIMIT 1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Device::try_from).transpose()
    }

    async fn insert_device(&self, device: &NewDevice) -> Result<DeviceId, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO devices (vendor, status, gateway_uuid, created)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&device.vendor)
        .bind(device.status.as_str())
        .bind(device.gateway_id.to_string())
        .bind(device.created)
        .execute(&self.pool)
        .await?;

        Ok(DeviceId::from_i64(result.last_insert_rowid()))
    }

    async fn update_device(&self, device: &Device) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE devices
            SET vendor = ?2,
                status = ?3,
                gateway_uuid = ?4
            WHERE uid = ?1
            "#,
        )
        .bind(device.id().as_i64())
        .bind(device.vendor())
        .bind(device.status().as_str())
        .bind(device.gateway_id().to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_device(&self, id: DeviceId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM devices WHERE uid = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
