//! Exif tag decoding for JPEG buffers.
//!
//! This module decodes the TIFF-structured metadata embedded in a JPEG's
//! Exif APP1 segment and derives a display density from it.
//!
//! # Key Concepts
//!
//! - **Byte order**: the TIFF header declares how multi-byte fields are
//!   read; the marker-to-order mapping follows the legacy reader this
//!   decoder is compatible with (0x4949 → big-endian reads), see
//!   [`ByteOrder`].
//!
//! - **IFD (Image File Directory)**: a counted list of 12-byte tag entries.
//!   Four directory kinds are walked in a fixed order, later ones reached
//!   through pointer tags decoded from earlier ones.
//!
//! - **Inline vs offset values**: values of at most 4 bytes live in the
//!   entry itself; larger ones sit behind an offset relative to the TIFF
//!   header.
//!
//! - **Flattened vocabulary**: consumers address tags by lowercase spaced
//!   names ("x resolution"); [`tag_map`] converts a decode result into that
//!   shape for [`derive_ppi`].

mod buffer;
mod decoder;
mod ppi;
mod segment;
mod tags;
mod value;

pub use buffer::{read_u16_be, read_u16_le, read_u32_be, read_u32_le, ByteOrder, ByteReader};
pub use decoder::{decode, DecodeResult, DecodedTag};
pub use ppi::{
    default_density, derive_ppi, display_scale, spaced_name, tag_map, OsFamily, TagMap,
};
pub use segment::find_tiff_header;
pub use tags::{tag_def, IfdKind, TagDef};
pub use value::{TagType, Value};
