//! External metadata extraction via the `exiftool` command-line program.
//!
//! The upload endpoint does not decode in-process; it hands the file to an
//! external tool and relays what the tool prints. Uploaded bytes are spooled
//! to a temporary file (the tool wants a path), the program is run with that
//! path as its only argument, and its line-oriented output is parsed into
//! the same flattened tag vocabulary the in-process decoder produces.
//!
//! Output lines look like:
//!
//! ```text
//! Resolution Unit                 : inches
//! X Resolution                    : 300
//! ```

use std::io::Write;

use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::exif::{TagMap, Value};

/// Default program name, resolved through `PATH`.
pub const DEFAULT_PROGRAM: &str = "exiftool";

// =============================================================================
// ExiftoolClient
// =============================================================================

/// Runs the external extraction tool against uploaded bytes.
#[derive(Debug, Clone)]
pub struct ExiftoolClient {
    program: String,
}

impl ExiftoolClient {
    /// Create a client invoking the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The configured program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Extract metadata from a file's bytes.
    ///
    /// # Errors
    /// - [`ExtractError::Stage`] if the bytes cannot be written to disk
    /// - [`ExtractError::Spawn`] if the program cannot be started
    /// - [`ExtractError::Tool`] if the program exits unsuccessfully
    /// - [`ExtractError::Parse`] if the output has no readable entries
    pub async fn extract(&self, data: &[u8]) -> Result<TagMap, ExtractError> {
        let mut staged = NamedTempFile::new()?;
        staged.write_all(data)?;
        staged.flush()?;

        debug!(
            program = %self.program,
            bytes = data.len(),
            path = %staged.path().display(),
            "running external extraction tool"
        );

        let output = Command::new(&self.program)
            .arg(staged.path())
            .output()
            .await
            .map_err(|e| ExtractError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(program = %self.program, %stderr, "extraction tool failed");
            return Err(ExtractError::Tool {
                program: self.program.clone(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tags = parse_output(&stdout);
        if tags.is_empty() && !stdout.trim().is_empty() {
            return Err(ExtractError::Parse(
                "no tag lines in tool output".to_string(),
            ));
        }
        Ok(tags)
    }
}

impl Default for ExiftoolClient {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

// =============================================================================
// Output Parsing
// =============================================================================

/// Parse the tool's `Key : value` lines into a flattened tag map.
///
/// Keys are trimmed and lowercased so they line up with the decoder's
/// spaced-name vocabulary; values stay text, the consumers coerce. Lines
/// without a separator are skipped.
pub fn parse_output(stdout: &str) -> TagMap {
    let mut tags = TagMap::new();
    for line in stdout.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        tags.insert(key, Value::Text(value.trim().to_string()));
    }
    tags
}

// =============================================================================
// Tests
// =============================================================================
