use thiserror::Error;

/// Fatal validation errors raised before any tag is decoded.
///
/// Each variant corresponds to one of the fail-fast checks performed on the
/// way to the TIFF header. None of them is retried or recovered from; a
/// failed check aborts the whole decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The buffer does not start with the JPEG start-of-image marker.
    #[error("invalid image format")]
    InvalidImageFormat,

    /// No APP1 segment carrying an "Exif" signature was found.
    #[error("no Exif data")]
    NoExifData,

    /// The TIFF header's byte-order marker is neither 0x4949 nor 0x4D4D.
    #[error("illegal byte order value 0x{0:04X}")]
    IllegalByteOrder(u16),
}

/// Errors that can occur while decoding tag directories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExifError {
    /// The buffer failed one of the up-front format checks.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A tag or directory field would be read past the end of the buffer.
    ///
    /// Malformed entry counts and value offsets end up here instead of
    /// panicking; the input is defective and the decode is abandoned.
    #[error("read out of bounds: requested {requested} bytes at offset {offset}, buffer is {size}")]
    OutOfBounds {
        offset: usize,
        requested: usize,
        size: usize,
    },

    /// An IFD entry declared a value type outside the TIFF type table.
    #[error("unknown tag value type: {0}")]
    UnknownTagType(u16),
}

/// Errors from the external extraction tool pipeline.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The uploaded bytes could not be spooled to a temporary file.
    #[error("failed to stage upload: {0}")]
    Stage(#[from] std::io::Error),

    /// The tool binary could not be spawned.
    #[error("failed to run {program}: {message}")]
    Spawn { program: String, message: String },

    /// The tool ran but exited unsuccessfully.
    #[error("{program} failed: {stderr}")]
    Tool { program: String, stderr: String },

    /// The tool produced output that could not be interpreted.
    #[error("unreadable tool output: {0}")]
    Parse(String),
}
