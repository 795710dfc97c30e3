//! HTTP server for the metadata API.
//!
//! Thin Axum surface over the decoder and the external extraction tool:
//! routing and CORS in [`routes`], request handling and error mapping in
//! [`handlers`].

pub mod handlers;
pub mod routes;

pub use handlers::{
    exif_handler, health_handler, upload_handler, AppState, DecodeResponse, ErrorResponse,
    HealthResponse,
};
pub use routes::{create_router, RouterConfig, DEFAULT_MAX_UPLOAD_BYTES};
