//! HTTP tests for the converter routes

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;
use unit_converter::web;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, header::HeaderMap, String) {
    let response = app.oneshot(request).await.expect("Failed to execute request");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/convert")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("Failed to build request")
}

#[tokio::test]
async fn test_index_renders_form() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, headers, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/html"));
    assert!(body.contains(r#"<form action="/convert" method="POST">"#));
}

#[tokio::test]
async fn test_unknown_path_renders_form() {
    let request = Request::builder().uri("/anything").body(Body::empty()).unwrap();
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Unit Converter"));
}

#[tokio::test]
async fn test_get_convert_redirects_to_form() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let request = Request::builder()
            .method(method)
            .uri("/convert")
            .body(Body::empty())
            .unwrap();
        let (status, headers, _) = send(web::router(), request).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[header::LOCATION], "/");
    }
}

#[tokio::test]
async fn test_length_conversion() {
    let request = post_form("value=100&from_unit=meter&to_unit=centimeter&conversion_type=length");
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("100 meter = <strong>10000</strong> centimeter"));
}

#[tokio::test]
async fn test_temperature_conversion() {
    let request =
        post_form("value=0&from_unit=celsius&to_unit=fahrenheit&conversion_type=temperature");
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>32</strong> fahrenheit"));
}

#[tokio::test]
async fn test_negative_value_is_rejected() {
    let request = post_form("value=-5&from_unit=meter&to_unit=centimeter&conversion_type=length");
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid input value");
}

#[tokio::test]
async fn test_invalid_conversion_type_is_rejected() {
    let request = post_form("value=1&from_unit=liter&to_unit=milliliter&conversion_type=volume");
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid conversion type");
}

#[tokio::test]
async fn test_unknown_unit_is_rejected() {
    let request = post_form("value=1&from_unit=meter&to_unit=furlong&conversion_type=length");
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Unknown unit: furlong");
}

#[tokio::test]
async fn test_missing_content_type_is_invalid_input() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/convert")
        .body(Body::from("value=1"))
        .unwrap();
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid input value");
}

#[tokio::test]
async fn test_app_layers_serve_requests() {
    let config = unit_converter::config::ServerConfig::default();
    let request = post_form("value=1&from_unit=kilogram&to_unit=gram&conversion_type=weight");
    let (status, _, body) = send(web::app(&config), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>1000</strong> gram"));
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let config = unit_converter::config::ServerConfig::default();
    let padding = "x".repeat(config.max_body_bytes + 1);
    let request = post_form(&format!(
        "value=1&from_unit=meter&to_unit=foot&conversion_type=length&pad={padding}"
    ));
    let (status, _, body) = send(web::app(&config), request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_ne!(body, "Invalid input value");
}

#[tokio::test]
async fn test_body_within_limit_is_converted() {
    let config = unit_converter::config::ServerConfig::default();
    let padding = "x".repeat(config.max_body_bytes / 2);
    let request = post_form(&format!(
        "value=1&from_unit=kilometer&to_unit=meter&conversion_type=length&pad={padding}"
    ));
    let (status, _, body) = send(web::app(&config), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>1000</strong> meter"));
}

#[tokio::test]
async fn test_repeated_field_uses_first_value() {
    let request = post_form(
        "value=1&value=2&from_unit=kilogram&to_unit=gram&to_unit=pound&conversion_type=weight",
    );
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 kilogram = <strong>1000</strong> gram"));
}

#[tokio::test]
async fn test_overflowing_result_is_rejected() {
    let request = post_form("value=1e308&from_unit=mile&to_unit=millimeter&conversion_type=length");
    let (status, _, body) = send(web::router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Invalid input value");
}
