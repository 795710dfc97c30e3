//! API integration tests for the metadata endpoints.
//!
//! Tests verify:
//! - In-process decoding over `POST /exif`
//! - Error cases (non-JPEG body, missing Exif, oversized payload)
//! - Upload validation and extraction-tool failure reporting
//! - HTTP response codes and content types

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use exifscope::exiftool::ExiftoolClient;
use exifscope::server::{create_router, AppState, RouterConfig};

use super::test_utils::{jpeg_without_exif, sample_camera_jpeg, Endian};

/// Router whose extraction tool cannot exist on any test machine.
fn test_router() -> axum::Router {
    let state = AppState::new(ExiftoolClient::new("exifscope-missing-tool"));
    create_router(state, RouterConfig::new().with_tracing(false))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// =============================================================================
// In-process Decode
// =============================================================================

#[tokio::test]
async fn test_exif_decode_success() {
    let request = Request::builder()
        .method("POST")
        .uri("/exif")
        .header(header::CONTENT_TYPE, "image/jpeg")
        .body(Body::from(sample_camera_jpeg(Endian::BigEndian)))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let json = body_json(response).await;
    assert_eq!(json["tags"]["image width"], 640);
    assert_eq!(json["tags"]["make"], "Acme");
    assert_eq!(json["descriptions"]["orientation"], "top-left");
    assert_eq!(json["descriptions"]["flash"], "Flash fired, auto mode");
    // The decoded unit is a raw code, so no density can be derived.
    assert_eq!(json["ppi"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_exif_decode_rejects_non_jpeg() {
    let request = Request::builder()
        .method("POST")
        .uri("/exif")
        .body(Body::from("plain text"))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "invalid_image_format");
}

#[tokio::test]
async fn test_exif_decode_rejects_missing_exif() {
    let request = Request::builder()
        .method("POST")
        .uri("/exif")
        .body(Body::from(jpeg_without_exif()))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "no_exif_data");
}

#[tokio::test]
async fn test_exif_decode_rejects_illegal_byte_order() {
    let data = super::test_utils::jpeg_shell(&[0x41, 0x41, 0, 42, 0, 0, 0, 8]);

    let request = Request::builder()
        .method("POST")
        .uri("/exif")
        .body(Body::from(data))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["error"], "illegal_byte_order");
}

#[tokio::test]
async fn test_exif_decode_rejects_oversized_body() {
    let state = AppState::new(ExiftoolClient::new("exifscope-missing-tool"));
    let router = create_router(
        state,
        RouterConfig::new()
            .with_max_upload_bytes(64)
            .with_tracing(false),
    );

    let request = Request::builder()
        .method("POST")
        .uri("/exif")
        .body(Body::from(vec![0u8; 1024]))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================================
// Upload
// =============================================================================

/// Assemble a multipart/form-data body with a single field.
fn multipart_body(boundary: &str, field_name: &str, payload: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"photo.jpg\"\r\n",
            field_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
    body
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let boundary = "exifscope-test-boundary";
    let body = multipart_body(boundary, "attachment", b"bytes");

    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "missing_file");
}

#[tokio::test]
async fn test_upload_without_multipart_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    // No multipart boundary at all is rejected before the handler runs.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_with_unavailable_tool() {
    let boundary = "exifscope-test-boundary";
    let body = multipart_body(boundary, "file", &sample_camera_jpeg(Endian::BigEndian));

    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "extraction_failed");
}
