/// Integration tests for the HTTP category source
///
/// Verifies the backend envelope handling against a mock HTTP server:
/// - Successful listing decoding (including `_id` alias and missing fields)
/// - `success: false` rejection
/// - Non-2xx status mapping
/// - Malformed bodies
mod common;

use common::{backend_for, listing_body, listing_with_null_fields, mock_listing};
use mockito::Server;
use storefront_catalog::{CategorySource, DomainError, HttpCategorySource};

#[tokio::test]
async fn test_fetch_decodes_listing() {
    let mut server = Server::new_async().await;
    let mock = mock_listing(&mut server, 200, &listing_body(), 1).await;

    let source = HttpCategorySource::new(&backend_for(&server)).expect("client should build");
    let categories = source.fetch_categories().await.expect("fetch should succeed");

    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0].id, "65a1");
    assert_eq!(categories[2].parent_category_id, Some(vec!["65a2".to_string()]));
    // Missing slug decodes as empty rather than failing the payload
    assert!(categories[3].slug.is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_null_identity_fields_do_not_fail_listing() {
    let mut server = Server::new_async().await;
    let mock = mock_listing(&mut server, 200, &listing_with_null_fields(), 1).await;

    let source = HttpCategorySource::new(&backend_for(&server)).expect("client should build");
    let categories = source.fetch_categories().await.expect("fetch should succeed");

    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].id, "65a1");
    assert!(categories[1].slug.is_empty());
    assert!(categories[2].id.is_empty());
    assert!(categories[2].name.is_empty());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_sends_bearer_token_when_configured() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/categories")
        .match_header("authorization", "Bearer storefront-key")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(listing_body())
        .create_async()
        .await;

    let mut backend = backend_for(&server);
    backend.api_key = Some("storefront-key".to_string());
    let source = HttpCategorySource::new(&backend).unwrap();

    assert!(source.fetch_categories().await.is_ok());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_false_is_rejected() {
    let mut server = Server::new_async().await;
    let body = r#"{"success": false, "message": "categories unavailable"}"#;
    let _mock = mock_listing(&mut server, 200, body, 1).await;

    let source = HttpCategorySource::new(&backend_for(&server)).unwrap();
    match source.fetch_categories().await {
        Err(DomainError::UpstreamRejected(msg)) => assert_eq!(msg, "categories unavailable"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_2xx_maps_to_status_error() {
    let mut server = Server::new_async().await;
    let _mock = mock_listing(&mut server, 502, "bad gateway", 1).await;

    let source = HttpCategorySource::new(&backend_for(&server)).unwrap();
    match source.fetch_categories().await {
        Err(DomainError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_malformed_payload() {
    let mut server = Server::new_async().await;
    let _mock = mock_listing(&mut server, 200, "<html>oops</html>", 1).await;

    let source = HttpCategorySource::new(&backend_for(&server)).unwrap();
    let err = source.fetch_categories().await.unwrap_err();
    assert!(matches!(err, DomainError::MalformedPayload(_)));
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_request_error() {
    let backend = storefront_catalog::BackendConfig {
        // Reserved port on localhost; nothing listens here
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
        ..Default::default()
    };

    let source = HttpCategorySource::new(&backend).unwrap();
    let err = source.fetch_categories().await.unwrap_err();
    assert!(matches!(err, DomainError::UpstreamRequest(_)));
}
