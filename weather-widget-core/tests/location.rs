//! IP geolocation against a mock lookup service

use std::time::Duration;

use serde_json::json;
use weather_widget_core::location::locate_or_fallback;
use weather_widget_core::{Coordinates, IpLocator, LocationError, Locator, FALLBACK_COORDINATES};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn locator_with(response: ResponseTemplate) -> (MockServer, IpLocator) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/json/"))
        .respond_with(response)
        .mount(&server)
        .await;
    let locator = IpLocator::with_endpoint(format!("{}/json/", server.uri())).unwrap();
    (server, locator)
}

#[tokio::test]
async fn test_ip_lookup_success() {
    let (_server, locator) = locator_with(ResponseTemplate::new(200).set_body_json(json!({
        "ip": "203.0.113.7",
        "city": "Kyiv",
        "latitude": 50.4501,
        "longitude": 30.5234
    })))
    .await;

    assert_eq!(
        locator.locate().await.unwrap(),
        Coordinates::new(50.4501, 30.5234)
    );
}

#[tokio::test]
async fn test_ip_lookup_error_body() {
    let (_server, locator) = locator_with(ResponseTemplate::new(200).set_body_json(json!({
        "error": true,
        "reason": "RateLimited"
    })))
    .await;

    match locator.locate().await {
        Err(LocationError::Lookup(reason)) => assert_eq!(reason, "RateLimited"),
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn test_ip_lookup_forbidden_is_permission_denied() {
    let (_server, locator) = locator_with(ResponseTemplate::new(403)).await;
    assert!(matches!(
        locator.locate().await,
        Err(LocationError::PermissionDenied)
    ));
}

#[tokio::test]
async fn test_ip_lookup_failure_falls_back() {
    let (_server, locator) = locator_with(ResponseTemplate::new(503)).await;
    let coords = locate_or_fallback(&locator, Duration::from_secs(5), FALLBACK_COORDINATES).await;
    assert_eq!(coords, FALLBACK_COORDINATES);
}

#[tokio::test]
async fn test_slow_ip_lookup_times_out_to_fallback() {
    let (_server, locator) = locator_with(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "latitude": 1.0, "longitude": 2.0 }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let coords =
        locate_or_fallback(&locator, Duration::from_millis(100), FALLBACK_COORDINATES).await;
    assert_eq!(coords, FALLBACK_COORDINATES);
}
