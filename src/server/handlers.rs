//! HTTP request handlers for the metadata API.
//!
//! # Endpoints
//!
//! - `POST /upload` - Extract metadata through the external tool
//! - `POST /exif`   - Decode Exif tags in-process
//! - `GET /health`  - Health check endpoint

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Map;
use tracing::{debug, error, warn};

use crate::error::{ExifError, ExtractError, FormatError};
use crate::exif::{decode, derive_ppi, spaced_name, tag_map, TagMap};
use crate::exiftool::ExiftoolClient;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state, passed to all handlers via Axum's State
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Client for the external extraction tool
    pub extractor: Arc<ExiftoolClient>,
}

impl AppState {
    /// Create state around the given extraction client.
    pub fn new(extractor: ExiftoolClient) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "no_exif_data", "missing_file")
    pub error: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Response from the in-process decode endpoint.
#[derive(Debug, Serialize)]
pub struct DecodeResponse {
    /// Flattened tag name → decoded value
    pub tags: serde_json::Value,

    /// Flattened tag name → human-readable description
    pub descriptions: serde_json::Value,

    /// Derived pixels-per-inch, when the tags allow it
    pub ppi: Option<u32>,
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /upload`
///
/// Accepts a multipart form with a "file" field, hands the bytes to the
/// external tool, and relays the extracted tag map as JSON.
pub async fn upload_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut file: Option<Bytes> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("file") {
                    match field.bytes().await {
                        Ok(bytes) => {
                            file = Some(bytes);
                            break;
                        }
                        Err(e) => {
                            return ErrorResponse::new("invalid_upload", e.to_string())
                                .into_response_with(StatusCode::BAD_REQUEST);
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return ErrorResponse::new("invalid_upload", e.to_string())
                    .into_response_with(StatusCode::BAD_REQUEST);
            }
        }
    }

    let Some(data) = file else {
        warn!("upload request without a file field");
        return ErrorResponse::new("missing_file", "multipart field 'file' is required")
            .into_response_with(StatusCode::BAD_REQUEST);
    };

    debug!(bytes = data.len(), "extracting metadata from upload");

    match state.extractor.extract(&data).await {
        Ok(tags) => {
            let mut json = tag_map_json(&tags);
            if let Some(ppi) = derive_ppi(&tags) {
                json.insert("ppi".to_string(), serde_json::Value::from(ppi));
            }
            Json(json).into_response()
        }
        Err(e) => extract_error_response(e),
    }
}

/// `POST /exif`
///
/// Accepts raw JPEG bytes and decodes them in-process.
pub async fn exif_handler(body: Bytes) -> Response {
    match decode(&body) {
        Ok(result) => {
            let tags = tag_map(&result);
            let ppi = derive_ppi(&tags);

            let descriptions: Map<String, serde_json::Value> = result
                .iter()
                .map(|(name, tag)| {
                    (
                        spaced_name(name),
                        serde_json::Value::String(tag.description.clone()),
                    )
                })
                .collect();

            Json(DecodeResponse {
                tags: serde_json::Value::Object(tag_map_json(&tags)),
                descriptions: serde_json::Value::Object(descriptions),
                ppi,
            })
            .into_response()
        }
        Err(e) => decode_error_response(e),
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Map decode failures to HTTP responses with distinct error kinds.
fn decode_error_response(error: ExifError) -> Response {
    let kind = match &error {
        ExifError::Format(FormatError::InvalidImageFormat) => "invalid_image_format",
        ExifError::Format(FormatError::NoExifData) => "no_exif_data",
        ExifError::Format(FormatError::IllegalByteOrder(_)) => "illegal_byte_order",
        ExifError::OutOfBounds { .. } => "truncated_exif",
        ExifError::UnknownTagType(_) => "unknown_tag_type",
    };
    debug!(%error, kind, "decode request failed");
    ErrorResponse::new(kind, error.to_string())
        .into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
}

/// Map extraction failures to HTTP responses.
///
/// Everything here is a server-side problem except unreadable output, which
/// the original endpoint also reported as an internal error.
fn extract_error_response(error: ExtractError) -> Response {
    error!(%error, "external extraction failed");
    ErrorResponse::new("extraction_failed", error.to_string())
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Render a flattened tag map as a JSON object.
fn tag_map_json(tags: &TagMap) -> Map<String, serde_json::Value> {
    tags.iter()
        .map(|(name, value)| (name.clone(), value.to_json()))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
