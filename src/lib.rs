//! # ExifScope
//!
//! An Exif metadata decoder and inspection server for JPEG images.
//!
//! The decoder walks the TIFF-structured tag directories embedded in a
//! JPEG's Exif APP1 segment and produces a flat mapping of named, decoded,
//! human-readable tags, entirely in-process over a borrowed byte buffer.
//! A derived pixels-per-inch value feeds display scaling. The companion
//! HTTP server exposes the same decode over HTTP and an upload endpoint
//! backed by an external extraction tool.
//!
//! ## Features
//!
//! - **In-process decoding**: JPEG APP1 scanning, byte-order handling, and
//!   typed tag value reads over a borrowed buffer, with no partial results
//! - **Named tag tables**: the 0th, Exif, GPS, and interoperability
//!   vocabularies, with human-readable renderings for enum-coded tags
//! - **Density derivation**: pixels-per-inch from either historical
//!   resolution vocabulary, plus per-OS default display densities
//! - **External tool endpoint**: uploads are spooled and handed to
//!   `exiftool` (or any compatible program), output relayed as JSON
//!
//! ## Architecture
//!
//! - [`exif`] - Segment scanning, tag decoding, and density derivation
//! - [`exiftool`] - External extraction tool client
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error taxonomy
//!
//! ## Example
//!
//! ```rust,no_run
//! use exifscope::exif::{decode, derive_ppi, tag_map};
//!
//! let data = std::fs::read("photo.jpg").unwrap();
//! let result = decode(&data).unwrap();
//!
//! if let Some(orientation) = result.description("Orientation") {
//!     println!("orientation: {}", orientation);
//! }
//!
//! let ppi = derive_ppi(&tag_map(&result));
//! println!("density: {:?}", ppi);
//! ```

pub mod config;
pub mod error;
pub mod exif;
pub mod exiftool;
pub mod server;

// Re-export commonly used types
pub use config::{Cli, Command, InspectConfig, ServeConfig};
pub use error::{ExifError, ExtractError, FormatError};
pub use exif::{
    decode, default_density, derive_ppi, display_scale, spaced_name, tag_map, ByteOrder,
    DecodeResult, DecodedTag, IfdKind, OsFamily, TagMap, TagType, Value,
};
pub use exiftool::ExiftoolClient;
pub use server::{create_router, AppState, RouterConfig};
