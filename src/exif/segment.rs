//! JPEG segment scanning.
//!
//! Exif metadata lives inside a JPEG APP1 marker segment, identified by the
//! ASCII signature "Exif" plus a NUL pad right after the segment length. The
//! scanner walks consecutive APPn segments from the start-of-image marker
//! until it runs off the marker chain, remembering where the embedded TIFF
//! header begins.
//!
//! # Segment Layout
//!
//! ```text
//! Bytes 0-1: APP1 marker (0xFFE1)
//! Bytes 2-3: Segment length (big-endian, excludes the marker itself)
//! Bytes 4-7: "Exif" signature
//! Bytes 8-9: NUL padding
//! Byte  10:  Start of the TIFF header
//! ```

use crate::error::{ExifError, FormatError};

use super::buffer::ByteReader;

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker.
pub const SOI: u16 = 0xFFD8;

/// First application segment marker (APP0).
pub const APP0: u16 = 0xFFE0;

/// Application segment 1 marker, the one that carries Exif.
pub const APP1: u16 = 0xFFE1;

/// Last application segment marker (APP15).
pub const APP15: u16 = 0xFFEF;

/// "Exif" as a big-endian u32.
const EXIF_SIGNATURE: u32 = 0x4578_6966;

/// Offset from an APP1 marker to the embedded TIFF header.
const TIFF_HEADER_OFFSET: usize = 10;

/// Offset from an APPn marker to its identifier bytes.
const APP_ID_OFFSET: usize = 4;

/// Size of a marker in bytes.
const MARKER_SIZE: usize = 2;

// =============================================================================
// Scanning
// =============================================================================

/// Validate the JPEG signature and locate the Exif TIFF header.
///
/// Returns the absolute offset of the TIFF header inside `reader`. The scan
/// keeps walking APPn segments after the first Exif match so that it stops at
/// the same place the marker chain does, but the first match is the one
/// reported.
///
/// # Errors
/// - `FormatError::InvalidImageFormat` if the buffer does not start with SOI
/// - `FormatError::NoExifData` if no Exif APP1 segment is present
pub fn find_tiff_header(reader: &ByteReader<'_>) -> Result<usize, ExifError> {
    if reader.len() < MARKER_SIZE || reader.read_marker_u16(0)? != SOI {
        return Err(FormatError::InvalidImageFormat.into());
    }

    let mut position = MARKER_SIZE;
    let mut tiff_offset: Option<usize> = None;

    loop {
        // A candidate needs a marker, identifier bytes, and the NUL pad.
        if reader.len() < position + APP_ID_OFFSET + 5 {
            break;
        }

        if is_exif_app1_marker(reader, position)? {
            let field_length = reader.read_marker_u16(position + MARKER_SIZE)? as usize;
            if tiff_offset.is_none() {
                tiff_offset = Some(position + TIFF_HEADER_OFFSET);
            }
            position += MARKER_SIZE + field_length;
        } else if is_app_marker(reader, position)? {
            let field_length = reader.read_marker_u16(position + MARKER_SIZE)? as usize;
            position += MARKER_SIZE + field_length;
        } else {
            break;
        }
    }

    tiff_offset.ok_or_else(|| FormatError::NoExifData.into())
}

/// Check for an APP1 marker carrying the "Exif\0" identifier.
fn is_exif_app1_marker(reader: &ByteReader<'_>, position: usize) -> Result<bool, ExifError> {
    Ok(reader.read_marker_u16(position)? == APP1
        && reader.read_marker_u32(position + APP_ID_OFFSET)? == EXIF_SIGNATURE
        && reader.read_u8(position + APP_ID_OFFSET + 4)? == 0x00)
}

/// Check for any APPn marker (APP0 through APP15).
fn is_app_marker(reader: &ByteReader<'_>, position: usize) -> Result<bool, ExifError> {
    let marker = reader.read_marker_u16(position)?;
    Ok((APP0..=APP15).contains(&marker))
}

// =============================================================================
// Tests
// =============================================================================
