//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for an in-memory SQLite database with
//! migrations applied, and a fully wired application router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::util::ServiceExt;

use gateway_registry::infrastructure::driven_adapters::config::AppConfig;
use gateway_registry::infrastructure::driven_adapters::database::run_migrations;
use gateway_registry::infrastructure::driven_adapters::{SqliteDeviceRepository, SqliteGatewayRepository};
use gateway_registry::infrastructure::driving_adapters::api_rest::{router, AppState};

/// Response captured from the router
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// Header value as text, if present
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The `msg` field of the body
    pub fn msg(&self) -> &str {
        self.body["msg"].as_str().unwrap_or_default()
    }
}

/// Test application context
#[derive(Clone)]
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    /// Create a new test application with a fresh in-memory database
    pub async fn new() -> Self {
        // One connection that never expires keeps the in-memory database alive
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        run_migrations(&pool).await.expect("Failed to run migrations");

        let gateway_repository = Arc::new(SqliteGatewayRepository::new(pool.clone()));
        let device_repository = Arc::new(SqliteDeviceRepository::new(pool.clone()));

        let app_state = AppState::new(Arc::new(create_test_config()), gateway_repository, device_repository);

        Self {
            router: router(app_state),
            pool,
        }
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }

    /// Send a request with a raw body and an optional content type
    pub async fn request_raw(&self, method: Method, uri: &str, content_type: Option<&str>, body: &str) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, headers, body }
    }

    /// Create a gateway and return its uuid
    pub async fn create_gateway(&self, name: &str, ipv4: &str) -> String {
        let response = self
            .request(Method::POST, "/gateways", Some(json!({ "name": name, "ipv4": ipv4 })))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["uuid"].as_str().unwrap().to_string()
    }

    /// Create a device under a gateway and return its uid
    pub async fn create_device(&self, gateway_uuid: &str, vendor: &str) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/devices",
                Some(json!({ "vendor": vendor, "status": "online", "gateway_uuid": gateway_uuid })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["uid"].as_i64().unwrap()
    }

    /// Number of devices referencing a gateway, read straight from the store
    pub async fn count_devices(&self, gateway_uuid: &str) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM devices WHERE gateway_uuid = ?1")
            .bind(gateway_uuid)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count devices")
    }
}

/// Create a test configuration
fn create_test_config() -> AppConfig {
    use config::{Config, File, FileFormat};

    let config_str = r#"
[server]
host = "127.0.0.1"
port = 0
public_url = "http://localhost:3000"

[database]
url = "sqlite::memory:"
max_connections = 1
min_connections = 1
"#;

    Config::builder()
        .add_source(File::from_str(config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}
