//! The tag directory decoder.
//!
//! Decoding is a single synchronous pass over a borrowed buffer: validate
//! the JPEG container, locate the TIFF header inside the Exif APP1 segment,
//! fix the byte order, then walk up to four tag directories in a fixed
//! order. All decode state lives in a per-call context so concurrent and
//! repeated calls cannot interfere.
//!
//! # IFD Layout
//!
//! ```text
//! Offset 0:      u16 entry count
//! Offset 2:      count * 12-byte entries
//!   entry + 0:   u16 tag code
//!   entry + 2:   u16 value type
//!   entry + 4:   u32 value count
//!   entry + 8:   inline value, or u32 offset from the TIFF header
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{ExifError, FormatError};

use super::buffer::{ByteOrder, ByteReader};
use super::segment::find_tiff_header;
use super::tags::{tag_def, IfdKind};
use super::value::{TagType, Value};

/// Byte-order marker selecting [`ByteOrder::BigEndian`].
///
/// The marker-to-order mapping is inherited from the legacy reader this
/// decoder stays compatible with; see [`ByteOrder`].
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4949;

/// Byte-order marker selecting [`ByteOrder::LittleEndian`].
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4D4D;

/// Size of one IFD entry in bytes.
const IFD_ENTRY_SIZE: usize = 12;

// =============================================================================
// DecodedTag / DecodeResult
// =============================================================================

/// One decoded tag: its resolved name, raw value, and rendered description.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTag {
    /// Table name, or "undefined-<code>" for codes outside the vocabulary.
    pub name: String,

    /// The decoded value.
    pub value: Value,

    /// Human-readable rendering of the value.
    pub description: String,
}

/// The flat tag mapping produced by one decode call.
///
/// Keyed by resolved tag name; when directories collide on a name the later
/// directory wins. The result is owned by the caller, nothing survives
/// inside the decoder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeResult {
    tags: BTreeMap<String, DecodedTag>,
}

impl DecodeResult {
    /// Look up a tag by name.
    pub fn get(&self, name: &str) -> Option<&DecodedTag> {
        self.tags.get(name)
    }

    /// A tag's decoded value, if present.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.tags.get(name).map(|tag| &tag.value)
    }

    /// A tag's rendered description, if present.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(|tag| tag.description.as_str())
    }

    /// Number of decoded tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether any tags were decoded.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate over tags in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, DecodedTag> {
        self.tags.iter()
    }
}

impl<'a> IntoIterator for &'a DecodeResult {
    type Item = (&'a String, &'a DecodedTag);
    type IntoIter = btree_map::Iter<'a, String, DecodedTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

// =============================================================================
// Decode Entry Point
// =============================================================================

/// Decode all Exif tags from a JPEG file buffer.
///
/// # Errors
/// - [`FormatError::InvalidImageFormat`] if the buffer is not a JPEG
/// - [`FormatError::NoExifData`] if no Exif APP1 segment exists
/// - [`FormatError::IllegalByteOrder`] for an unrecognized byte-order marker
/// - [`ExifError::OutOfBounds`] / [`ExifError::UnknownTagType`] for
///   structurally defective directories
pub fn decode(data: &[u8]) -> Result<DecodeResult, ExifError> {
    let reader = ByteReader::new(data);
    let tiff_offset = find_tiff_header(&reader)?;
    let byte_order = read_byte_order(&reader, tiff_offset)?;

    debug!(
        tiff_offset,
        ?byte_order,
        len = reader.len(),
        "decoding Exif tags"
    );

    let mut decoder = Decoder {
        reader,
        tiff_offset,
        byte_order,
        tags: BTreeMap::new(),
    };

    decoder.read_zeroth_ifd()?;
    decoder.read_exif_ifd()?;
    decoder.read_gps_ifd()?;
    decoder.read_interoperability_ifd()?;

    Ok(DecodeResult { tags: decoder.tags })
}

/// Read the byte-order marker at the start of the TIFF header.
fn read_byte_order(reader: &ByteReader<'_>, tiff_offset: usize) -> Result<ByteOrder, ExifError> {
    match reader.read_marker_u16(tiff_offset)? {
        BYTE_ORDER_BIG_ENDIAN => Ok(ByteOrder::BigEndian),
        BYTE_ORDER_LITTLE_ENDIAN => Ok(ByteOrder::LittleEndian),
        other => Err(FormatError::IllegalByteOrder(other).into()),
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// Per-call decode context.
///
/// Holds what the walk needs at every step: the buffer, the TIFF header base
/// that all offsets are relative to, the byte order, and the accumulating
/// tag map.
struct Decoder<'a> {
    reader: ByteReader<'a>,
    tiff_offset: usize,
    byte_order: ByteOrder,
    tags: BTreeMap<String, DecodedTag>,
}

impl Decoder<'_> {
    /// Walk the 0th IFD, located via the offset field of the TIFF header.
    fn read_zeroth_ifd(&mut self) -> Result<(), ExifError> {
        let relative = self
            .reader
            .read_u32(self.tiff_offset + 4, self.byte_order)? as usize;
        self.walk_ifd(IfdKind::Zeroth, self.tiff_offset + relative)
    }

    /// Walk the Exif IFD if the 0th IFD declared a pointer to it.
    fn read_exif_ifd(&mut self) -> Result<(), ExifError> {
        match self.pointer_target("Exif IFD Pointer") {
            Some(offset) => self.walk_ifd(IfdKind::Exif, offset),
            None => Ok(()),
        }
    }

    /// Walk the GPS IFD if the 0th IFD declared a pointer to it.
    fn read_gps_ifd(&mut self) -> Result<(), ExifError> {
        match self.pointer_target("GPS Info IFD Pointer") {
            Some(offset) => self.walk_ifd(IfdKind::Gps, offset),
            None => Ok(()),
        }
    }

    /// Walk the interoperability IFD if the Exif IFD declared a pointer.
    fn read_interoperability_ifd(&mut self) -> Result<(), ExifError> {
        match self.pointer_target("Interoperability IFD Pointer") {
            Some(offset) => self.walk_ifd(IfdKind::Interoperability, offset),
            None => Ok(()),
        }
    }

    /// Resolve a pointer tag to an absolute sub-IFD offset.
    fn pointer_target(&self, name: &str) -> Option<usize> {
        let pointer = self.tags.get(name)?.value.as_number()?;
        Some(self.tiff_offset + pointer as usize)
    }

    /// Decode every entry of one IFD into the tag map.
    fn walk_ifd(&mut self, kind: IfdKind, offset: usize) -> Result<(), ExifError> {
        let field_count = self.reader.read_u16(offset, self.byte_order)? as usize;
        debug!(kind = kind.as_str(), offset, field_count, "walking IFD");

        let mut entry_offset = offset + 2;
        for _ in 0..field_count {
            let tag = self.read_tag(kind, entry_offset)?;
            self.tags.insert(tag.name.clone(), tag);
            entry_offset += IFD_ENTRY_SIZE;
        }
        Ok(())
    }

    /// Decode a single 12-byte IFD entry.
    fn read_tag(&self, kind: IfdKind, entry_offset: usize) -> Result<DecodedTag, ExifError> {
        let code = self.reader.read_u16(entry_offset, self.byte_order)?;
        let type_raw = self.reader.read_u16(entry_offset + 2, self.byte_order)?;
        let count = self.reader.read_u32(entry_offset + 4, self.byte_order)? as usize;

        let tag_type = TagType::from_u16(type_raw).ok_or(ExifError::UnknownTagType(type_raw))?;

        // Small values live in the entry itself; larger ones sit behind an
        // offset relative to the TIFF header.
        let value = if tag_type.fits_inline(count) {
            self.read_value(entry_offset + 8, tag_type, count)?
        } else {
            let relative = self.reader.read_u32(entry_offset + 8, self.byte_order)? as usize;
            self.read_value(self.tiff_offset + relative, tag_type, count)?
        };

        Ok(self.resolve_tag(kind, code, value))
    }

    /// Read `count` consecutive values of `tag_type` starting at `offset`.
    fn read_value(
        &self,
        offset: usize,
        tag_type: TagType,
        count: usize,
    ) -> Result<Value, ExifError> {
        if tag_type == TagType::Ascii {
            let mut chars = Vec::with_capacity(count);
            for index in 0..count {
                chars.push(self.reader.read_u8(offset + index)? as char);
            }
            return Ok(Value::Strings(split_null_separated(&chars)));
        }

        let width = tag_type.size_in_bytes();
        let mut numbers = Vec::with_capacity(count);
        for index in 0..count {
            numbers.push(self.read_component(offset + index * width, tag_type)?);
        }

        if numbers.len() == 1 {
            Ok(Value::Scalar(numbers[0]))
        } else {
            Ok(Value::Numbers(numbers))
        }
    }

    /// Read one value of a non-character type.
    fn read_component(&self, offset: usize, tag_type: TagType) -> Result<f64, ExifError> {
        let order = self.byte_order;
        Ok(match tag_type {
            TagType::Byte | TagType::Undefined => self.reader.read_u8(offset)? as f64,
            TagType::Short => self.reader.read_u16(offset, order)? as f64,
            TagType::Long => self.reader.read_u32(offset, order)? as f64,
            TagType::SignedLong => self.reader.read_i32(offset, order)? as f64,
            TagType::Rational => {
                let numerator = self.reader.read_u32(offset, order)? as f64;
                let denominator = self.reader.read_u32(offset + 4, order)? as f64;
                numerator / denominator
            }
            TagType::SignedRational => {
                let numerator = self.reader.read_i32(offset, order)? as f64;
                let denominator = self.reader.read_i32(offset + 4, order)? as f64;
                numerator / denominator
            }
            TagType::Ascii => unreachable!("character data is read as a sequence"),
        })
    }

    /// Attach the table name and description, or synthesize them.
    fn resolve_tag(&self, kind: IfdKind, code: u16, value: Value) -> DecodedTag {
        match tag_def(kind, code) {
            Some(def) => {
                let description = match def.describe {
                    Some(describe) => describe(&value),
                    None => value.join(", "),
                };
                DecodedTag {
                    name: def.name.to_string(),
                    value,
                    description,
                }
            }
            None => {
                let description = value.join(", ");
                DecodedTag {
                    name: format!("undefined-{}", code),
                    value,
                    description,
                }
            }
        }
    }
}

/// Split character data on NUL separators into separate strings.
///
/// Interior separators delimit strings (runs of NULs leave empty slots so
/// positions are kept); trailing separators are dropped.
fn split_null_separated(chars: &[char]) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut index = 0;
    for &character in chars {
        if character == '\0' {
            index += 1;
            continue;
        }
        while parts.len() <= index {
            parts.push(String::new());
        }
        parts[index].push(character);
    }
    parts
}

// =============================================================================
// Tests
// =============================================================================
