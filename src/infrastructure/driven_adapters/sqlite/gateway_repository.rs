//! SQLite Gateway Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::models::gateway::{Gateway, GatewayId};
use crate::domain::ports::GatewayRepository;
use crate::shared::errors::RepositoryError;

/// Database row representation for gateways table
#[derive(Debug, sqlx::FromRow)]
struct GatewayRow {
    uuid: String,
    name: String,
    ipv4: String,
    created: DateTime<Utc>,
}

impl TryFrom<GatewayRow> for Gateway {
    type Error = RepositoryError;

    fn try_from(row: GatewayRow) -> Result<Self, Self::Error> {
        let id = row
            .uuid
            .parse::<GatewayId>()
            .map_err(|_| RepositoryError::Mapping(format!("Invalid gateway uuid in store: {}", row.uuid)))?;

        Ok(Gateway::restore(id, row.name, row.ipv4, row.created))
    }
}

/// SQLite implementation of GatewayRepository
pub struct SqliteGatewayRepository {
    pool: SqlitePool,
}

impl SqliteGatewayRepository {
    /// Create a new SqliteGatewayRepository
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GatewayRepository for SqliteGatewayRepository {
    async fn list_gateways(&self) -> Result<Vec<Gateway>, RepositoryError> {
        let rows = sqlx::query_as::<_, GatewayRow>(
            r#"
            SELECT uuid, name, ipv4, created
            FROM gateways
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Gateway::try_from).collect()
    }

    async fn get_gateway(&self, id: &GatewayId) -> Result<Option<Gateway>, RepositoryError> {
        let row = sqlx::query_as::<_, GatewayRow>(
            r#"
            SELECT uuid, name, ipv4, created
            FROM gateways
            WHERE uuid = ?1
            LIMIT 1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Gateway::try_from).transpose()
    }

    async fn insert_gateway(&self, gateway: &Gateway) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO gateways (uuid, name, ipv4, created)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(gateway.id().to_string())
        .bind(gateway.name())
        .bind(gateway.ipv4())
        .bind(gateway.created())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(RepositoryError::Duplicate(gateway.id().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update_gateway(&self, gateway: &Gateway) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE gateways
            SET name = ?2,
                ipv4 = ?3
            WHERE uuid = ?1
            "#,
        )
        .bind(gateway.id().to_string())
        .bind(gateway.name())
        .bind(gateway.ipv4())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_gateway(&self, id: &GatewayId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM gateways WHERE uuid = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
