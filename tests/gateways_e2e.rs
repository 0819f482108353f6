//! End-to-end tests for gateway endpoints
//!
//! These tests drive the full router against an in-memory SQLite database
//! with migrations applied.

mod common;

use std::collections::HashSet;

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use common::TestApp;

const UNKNOWN_UUID: &str = "de4cb03b-a878-4fbe-858e-94b388d2552c";

// ============================================================================
// POST /gateways - Create Gateway Tests
// ============================================================================

#[tokio::test]
async fn test_create_gateway_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/gateways",
            Some(json!({ "name": "server1", "ipv4": "10.0.0.1" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.msg(), "Gateway added successfully.");

    let uuid = response.body["uuid"].as_str().unwrap();
    assert_eq!(uuid.len(), 36);
    assert!(uuid.chars().all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert_eq!(
        response.header(header::LOCATION),
        Some(format!("http://localhost:3000/gateways/{uuid}").as_str())
    );
}

#[tokio::test]
async fn test_create_gateway_ids_are_unique() {
    let app = TestApp::new().await;

    let mut ids = HashSet::new();
    for i in 0..20 {
        ids.insert(app.create_gateway(&format!("server{i}"), "10.0.0.1").await);
    }

    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_create_gateway_missing_name() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/gateways", Some(json!({ "ipv4": "10.0.0.1" })))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.msg(), "Invalid gateway name (required).");
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
    assert!(response.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_gateway_invalid_ipv4() {
    let app = TestApp::new().await;

    for ipv4 in ["256.0.0.1", "10.0.0", "10.0.0.01", "a.b.c.d", "", "1\u{0660}.0.0.1"] {
        let response = app
            .request(Method::POST, "/gateways", Some(json!({ "name": "server1", "ipv4": ipv4 })))
            .await;

        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "ipv4 {ipv4:?}");
        assert_eq!(response.msg(), "Invalid gateway IPv4 address (required).");
    }
}

#[tokio::test]
async fn test_create_gateway_name_checked_before_ipv4() {
    let app = TestApp::new().await;

    let response = app.request(Method::POST, "/gateways", Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.msg(), "Invalid gateway name (required).");
}

#[tokio::test]
async fn test_create_gateway_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .request_raw(Method::POST, "/gateways", Some("application/json"), "{\"name\": ")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_gateway_wrong_field_type() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::POST, "/gateways", Some(json!({ "name": 42, "ipv4": "10.0.0.1" })))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.msg(), "Invalid gateway name (required).");

    let response = app
        .request(Method::POST, "/gateways", Some(json!({ "name": "server1", "ipv4": [10, 0, 0, 1] })))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.msg(), "Invalid gateway IPv4 address (required).");
}

#[tokio::test]
async fn test_create_gateway_body_not_an_object() {
    let app = TestApp::new().await;

    let response = app.request(Method::POST, "/gateways", Some(json!("server1"))).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_gateway_wrong_field_type() {
    let app = TestApp::new().await;
    let uuid = app.create_gateway("server1", "10.0.0.1").await;

    let response = app
        .request(Method::PUT, &format!("/gateways/{uuid}"), Some(json!({ "ipv4": 167_772_161 })))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.msg(), "Invalid gateway IPv4 address (required).");
    let after = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(after.body["ipv4"], "10.0.0.1");
}

#[tokio::test]
async fn test_create_gateway_without_content_type() {
    let app = TestApp::new().await;

    let response = app
        .request_raw(Method::POST, "/gateways", None, "{\"name\":\"server1\",\"ipv4\":\"10.0.0.1\"}")
        .await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.body["code"], "UNSUPPORTED_MEDIA_TYPE");
}

// ============================================================================
// GET /gateways - List Gateways Tests
// ============================================================================

#[tokio::test]
async fn test_list_gateways_empty() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/gateways", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_list_gateways_with_nested_devices() {
    let app = TestApp::new().await;

    let first = app.create_gateway("server1", "10.0.0.1").await;
    let second = app.create_gateway("server2", "10.0.0.2").await;
    let uid = app.create_device(&second, "Haier").await;

    let response = app.request(Method::GET, "/gateways", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let gateways = response.body.as_array().unwrap();
    assert_eq!(gateways.len(), 2);

    assert_eq!(gateways[0]["uuid"], first.as_str());
    assert_eq!(gateways[0]["name"], "server1");
    assert_eq!(gateways[0]["devices"], json!([]));

    assert_eq!(gateways[1]["uuid"], second.as_str());
    let devices = gateways[1]["devices"].as_array().unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["uid"], uid);
    assert_eq!(devices[0]["vendor"], "Haier");
    assert_eq!(devices[0]["status"], "online");
    assert!(devices[0].get("gateway_uuid").is_none());
}

// ============================================================================
// GET /gateways/:uuid - Get Gateway Tests
// ============================================================================

#[tokio::test]
async fn test_get_gateway_success() {
    let app = TestApp::new().await;
    let uuid = app.create_gateway("server1", "192.168.1.254").await;
    app.create_device(&uuid, "Haier").await;
    app.create_device(&uuid, "Bosch").await;

    let response = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["uuid"], uuid.as_str());
    assert_eq!(response.body["name"], "server1");
    assert_eq!(response.body["ipv4"], "192.168.1.254");
    assert!(response.body["created"].is_string());
    assert_eq!(response.body["devices"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_gateway_not_found() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, &format!("/gateways/{UNKNOWN_UUID}"), None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.msg(), "Gateway not found.");
}

#[tokio::test]
async fn test_get_gateway_malformed_uuid() {
    let app = TestApp::new().await;

    for uuid in ["not-a-uuid", "DE4CB03B-A878-4FBE-858E-94B388D2552C", "de4cb03ba8784fbe858e94b388d2552c"] {
        let response = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "uuid {uuid}");
        assert_eq!(response.msg(), "Incorrect or missing gateway UUID.");
    }
}

// ============================================================================
// PUT /gateways/:uuid - Update Gateway Tests
// ============================================================================

#[tokio::test]
async fn test_update_gateway_empty_body_keeps_fields() {
    let app = TestApp::new().await;
    let uuid = app.create_gateway("server1", "10.0.0.1").await;
    let before = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;

    let response = app
        .request(Method::PUT, &format!("/gateways/{uuid}"), Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.msg(), "Gateway updated successfully.");

    let after = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(after.body, before.body);
}

#[tokio::test]
async fn test_update_gateway_single_field() {
    let app = TestApp::new().await;
    let uuid = app.create_gateway("server1", "10.0.0.1").await;

    let response = app
        .request(Method::PUT, &format!("/gateways/{uuid}"), Some(json!({ "ipv4": "10.0.0.2" })))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(after.body["name"], "server1");
    assert_eq!(after.body["ipv4"], "10.0.0.2");
}

#[tokio::test]
async fn test_update_gateway_null_field_is_invalid() {
    let app = TestApp::new().await;
    let uuid = app.create_gateway("server1", "10.0.0.1").await;

    let response = app
        .request(Method::PUT, &format!("/gateways/{uuid}"), Some(json!({ "name": null })))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.msg(), "Invalid gateway name (required).");

    let after = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(after.body["name"], "server1");
}

#[tokio::test]
async fn test_update_gateway_not_found() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::PUT, &format!("/gateways/{UNKNOWN_UUID}"), Some(json!({ "name": "x" })))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_gateway_malformed_uuid() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::PUT, "/gateways/123", Some(json!({ "name": "x" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// DELETE /gateways/:uuid - Delete Gateway Tests
// ============================================================================

#[tokio::test]
async fn test_delete_gateway_success() {
    let app = TestApp::new().await;
    let uuid = app.create_gateway("server1", "10.0.0.1").await;

    let response = app.request(Method::DELETE, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.msg(), "Gateway deleted successfully.");

    let again = app.request(Method::DELETE, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let get = app.request(Method::GET, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_gateway_keeps_devices() {
    let app = TestApp::new().await;
    let uuid = app.create_gateway("server1", "10.0.0.1").await;
    let uid = app.create_device(&uuid, "Haier").await;

    let response = app.request(Method::DELETE, &format!("/gateways/{uuid}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let device = app.request(Method::GET, &format!("/devices/{uid}"), None).await;
    assert_eq!(device.status, StatusCode::OK);
    assert_eq!(device.body["gateway_uuid"], uuid.as_str());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/gateways", None).await;

    assert!(response.header(header::HeaderName::from_static("x-request-id")).is_some());
}
