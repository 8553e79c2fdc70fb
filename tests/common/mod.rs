//! Common test utilities for integration tests
//!
//! Provides backend payload fixtures and mock-server helpers shared
//! across integration test files.

#![allow(dead_code)]

use mockito::{Mock, ServerGuard};
use storefront_catalog::BackendConfig;

/// Category listing as the backend returns it.
pub fn listing_body() -> String {
    serde_json::json!({
        "success": true,
        "data": [
            {
                "_id": "65a1",
                "slug": "safety-security",
                "name": "Safety & Security",
                "parent_category_id": null,
                "icon": "shield"
            },
            {
                "_id": "65a2",
                "slug": "Power-Tools",
                "name": "Power Tools",
                "parent_category_id": null
            },
            {
                "_id": "65a3",
                "slug": "cordless-drills",
                "name": "Cordless Drills",
                "parent_category_id": ["65a2"],
                "description": "Battery powered drills and drivers"
            },
            {
                "_id": "65a4",
                "name": "Unlisted",
                "parent_category_id": null
            }
        ]
    })
    .to_string()
}

/// Category listing where some records carry `null` identity fields.
pub fn listing_with_null_fields() -> String {
    serde_json::json!({
        "success": true,
        "data": [
            {
                "_id": "65a1",
                "slug": "safety-security",
                "name": "Safety & Security",
                "parent_category_id": null
            },
            {
                "_id": "65a9",
                "slug": null,
                "name": "Draft Category",
                "parent_category_id": null
            },
            {
                "_id": null,
                "slug": "garden",
                "name": null,
                "parent_category_id": null
            }
        ]
    })
    .to_string()
}

/// Backend config pointing at a mock server.
pub fn backend_for(server: &ServerGuard) -> BackendConfig {
    BackendConfig {
        base_url: server.url(),
        timeout_secs: 2,
        ..Default::default()
    }
}

/// Mock the category listing, expecting exactly `hits` requests.
pub async fn mock_listing(
    server: &mut ServerGuard,
    status: usize,
    body: &str,
    hits: usize,
) -> Mock {
    server
        .mock("GET", "/categories")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(hits)
        .create_async()
        .await
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
