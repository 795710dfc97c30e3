//! Configuration management for ExifScope.
//!
//! Command-line arguments via clap, with `EXIFSCOPE_`-prefixed environment
//! variables and sensible defaults for everything optional.
//!
//! # Environment Variables
//!
//! - `EXIFSCOPE_HOST` - Server bind address (default: 0.0.0.0)
//! - `EXIFSCOPE_PORT` - Server port (default: 9000)
//! - `EXIFSCOPE_EXIFTOOL` - External extraction program (default: exiftool)
//! - `EXIFSCOPE_MAX_UPLOAD` - Upload size cap in bytes (default: 25MB)
//! - `EXIFSCOPE_CORS_ORIGINS` - Allowed CORS origins, comma-separated

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::exif::OsFamily;
use crate::exiftool::DEFAULT_PROGRAM;
use crate::server::DEFAULT_MAX_UPLOAD_BYTES;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 9000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// ExifScope - Exif metadata decoder and inspection server.
///
/// Decode Exif tags from JPEG files in-process, or serve an HTTP API that
/// extracts metadata from uploads with an external tool.
#[derive(Parser, Debug)]
#[command(name = "exifscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Consume the parsed arguments into the selected command.
    pub fn into_command(self) -> Command {
        self.command
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP metadata server.
    Serve(ServeConfig),

    /// Decode a local file and print its tags.
    Inspect(InspectConfig),
}

// =============================================================================
// Serve Configuration
// =============================================================================

/// Configuration for the `serve` command.
#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "EXIFSCOPE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "EXIFSCOPE_PORT")]
    pub port: u16,

    /// External extraction program used by the upload endpoint.
    #[arg(long, default_value = DEFAULT_PROGRAM, env = "EXIFSCOPE_EXIFTOOL")]
    pub exiftool: String,

    /// Maximum accepted upload size in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES, env = "EXIFSCOPE_MAX_UPLOAD")]
    pub max_upload_bytes: usize,

    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "EXIFSCOPE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.exiftool.trim().is_empty() {
            return Err(
                "extraction program is required. Set --exiftool or EXIFSCOPE_EXIFTOOL".to_string(),
            );
        }

        if self.max_upload_bytes == 0 {
            return Err("max_upload_bytes must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Inspect Configuration
// =============================================================================

/// Configuration for the `inspect` command.
#[derive(Args, Debug, Clone)]
pub struct InspectConfig {
    /// Path of the JPEG file to decode.
    pub file: PathBuf,

    /// Print the result as a JSON document instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// OS family whose default display density the scale factor is computed
    /// against. Defaults to the current platform.
    #[arg(long)]
    pub os: Option<OsFamily>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl InspectConfig {
    /// The OS family to assume, falling back to the build target.
    pub fn os_family(&self) -> OsFamily {
        self.os.unwrap_or(current_os_family())
    }
}

/// The OS family of the running platform.
pub fn current_os_family() -> OsFamily {
    match std::env::consts::OS {
        "macos" => OsFamily::Mac,
        "windows" => OsFamily::Windows,
        _ => OsFamily::Linux,
    }
}

// =============================================================================
// Tests
// =============================================================================
