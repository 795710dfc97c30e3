//! Shared utilities for integration tests.
//!
//! Builds synthetic JPEG files carrying Exif metadata, so tests can exercise
//! the decoder end-to-end without binary fixtures. The builder lays out up
//! to four tag directories, wires the pointer tags between them, and places
//! out-of-line values in a data section after the directories.

use exifscope::exif::TagType;

/// Field byte order for built files.
///
/// `BigEndian` writes most-significant byte first and pairs with the 0x4949
/// byte-order marker; `LittleEndian` pairs with 0x4D4D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    BigEndian,
    LittleEndian,
}

impl Endian {
    fn marker(self) -> [u8; 2] {
        match self {
            Endian::BigEndian => [0x49, 0x49],
            Endian::LittleEndian => [0x4D, 0x4D],
        }
    }

    pub fn u16_bytes(self, value: u16) -> [u8; 2] {
        match self {
            Endian::BigEndian => value.to_be_bytes(),
            Endian::LittleEndian => value.to_le_bytes(),
        }
    }

    pub fn u32_bytes(self, value: u32) -> [u8; 4] {
        match self {
            Endian::BigEndian => value.to_be_bytes(),
            Endian::LittleEndian => value.to_le_bytes(),
        }
    }

    pub fn i32_bytes(self, value: i32) -> [u8; 4] {
        match self {
            Endian::BigEndian => value.to_be_bytes(),
            Endian::LittleEndian => value.to_le_bytes(),
        }
    }
}

// =============================================================================
// Entries
// =============================================================================

/// One tag entry to be laid out in a directory.
#[derive(Debug, Clone)]
pub struct Entry {
    code: u16,
    tag_type: TagType,
    count: u32,
    /// Raw encoded value bytes, before inline/offset placement.
    data: Vec<u8>,
}

impl Entry {
    /// A single Short value.
    pub fn short(code: u16, value: u16, endian: Endian) -> Self {
        Self {
            code,
            tag_type: TagType::Short,
            count: 1,
            data: endian.u16_bytes(value).to_vec(),
        }
    }

    /// A sequence of Short values.
    pub fn shorts(code: u16, values: &[u16], endian: Endian) -> Self {
        let mut data = Vec::with_capacity(values.len() * 2);
        for &value in values {
            data.extend_from_slice(&endian.u16_bytes(value));
        }
        Self {
            code,
            tag_type: TagType::Short,
            count: values.len() as u32,
            data,
        }
    }

    /// A single Long value.
    pub fn long(code: u16, value: u32, endian: Endian) -> Self {
        Self {
            code,
            tag_type: TagType::Long,
            count: 1,
            data: endian.u32_bytes(value).to_vec(),
        }
    }

    /// A NUL-terminated character value.
    pub fn ascii(code: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        Self {
            code,
            tag_type: TagType::Ascii,
            count: data.len() as u32,
            data,
        }
    }

    /// A single Rational value.
    pub fn rational(code: u16, numerator: u32, denominator: u32, endian: Endian) -> Self {
        let mut data = Vec::with_capacity(8);
        data.extend_from_slice(&endian.u32_bytes(numerator));
        data.extend_from_slice(&endian.u32_bytes(denominator));
        Self {
            code,
            tag_type: TagType::Rational,
            count: 1,
            data,
        }
    }

    /// A sequence of Rational values.
    pub fn rationals(code: u16, values: &[(u32, u32)], endian: Endian) -> Self {
        let mut data = Vec::with_capacity(values.len() * 8);
        for &(numerator, denominator) in values {
            data.extend_from_slice(&endian.u32_bytes(numerator));
            data.extend_from_slice(&endian.u32_bytes(denominator));
        }
        Self {
            code,
            tag_type: TagType::Rational,
            count: values.len() as u32,
            data,
        }
    }

    /// A single SignedRational value.
    pub fn signed_rational(code: u16, numerator: i32, denominator: i32, endian: Endian) -> Self {
        let mut data = Vec::with_capacity(8);
        data.extend_from_slice(&endian.i32_bytes(numerator));
        data.extend_from_slice(&endian.i32_bytes(denominator));
        Self {
            code,
            tag_type: TagType::SignedRational,
            count: 1,
            data,
        }
    }

    /// Raw Undefined bytes.
    pub fn undefined(code: u16, bytes: &[u8]) -> Self {
        Self {
            code,
            tag_type: TagType::Undefined,
            count: bytes.len() as u32,
            data: bytes.to_vec(),
        }
    }
}

// =============================================================================
// ExifBuilder
// =============================================================================

/// Assembles a complete JPEG file with one Exif APP1 segment.
pub struct ExifBuilder {
    endian: Endian,
    zeroth: Vec<Entry>,
    exif: Vec<Entry>,
    gps: Vec<Entry>,
    interoperability: Vec<Entry>,
}

const EXIF_POINTER: u16 = 0x8769;
const GPS_POINTER: u16 = 0x8825;
const INTEROPERABILITY_POINTER: u16 = 0xA005;

impl ExifBuilder {
    pub fn new(endian: Endian) -> Self {
        Self {
            endian,
            zeroth: Vec::new(),
            exif: Vec::new(),
            gps: Vec::new(),
            interoperability: Vec::new(),
        }
    }

    pub fn zeroth(mut self, entry: Entry) -> Self {
        self.zeroth.push(entry);
        self
    }

    pub fn exif(mut self, entry: Entry) -> Self {
        self.exif.push(entry);
        self
    }

    pub fn gps(mut self, entry: Entry) -> Self {
        self.gps.push(entry);
        self
    }

    pub fn interoperability(mut self, entry: Entry) -> Self {
        self.interoperability.push(entry);
        self
    }

    /// Lay out the TIFF structure and wrap it in a JPEG shell.
    ///
    /// Pointer tags to the Exif, GPS, and interoperability directories are
    /// added automatically when those directories have entries.
    pub fn build(self) -> Vec<u8> {
        let endian = self.endian;

        // Assemble the final entry lists, pointers included, so directory
        // sizes are fixed before any offset is computed.
        let mut zeroth = self.zeroth;
        let mut exif = self.exif;
        let gps = self.gps;
        let interoperability = self.interoperability;

        let has_exif = !exif.is_empty();
        let has_gps = !gps.is_empty();
        let has_interoperability = !interoperability.is_empty();

        if has_exif {
            zeroth.push(Entry::long(EXIF_POINTER, 0, endian)); // patched below
        }
        if has_gps {
            zeroth.push(Entry::long(GPS_POINTER, 0, endian));
        }
        if has_interoperability {
            assert!(has_exif, "interoperability requires an Exif directory");
            exif.push(Entry::long(INTEROPERABILITY_POINTER, 0, endian));
        }

        let ifd_size = |entries: &[Entry]| 2 + entries.len() * 12 + 4;

        // Directory offsets, relative to the TIFF header.
        let zeroth_offset = 8usize;
        let exif_offset = zeroth_offset + ifd_size(&zeroth);
        let gps_offset = exif_offset + if has_exif { ifd_size(&exif) } else { 0 };
        let interoperability_offset = gps_offset + if has_gps { ifd_size(&gps) } else { 0 };
        let data_offset = interoperability_offset
            + if has_interoperability {
                ifd_size(&interoperability)
            } else {
                0
            };

        // Patch pointer targets now that the layout is known.
        for entry in zeroth.iter_mut().chain(exif.iter_mut()) {
            match entry.code {
                EXIF_POINTER => entry.data = endian.u32_bytes(exif_offset as u32).to_vec(),
                GPS_POINTER => entry.data = endian.u32_bytes(gps_offset as u32).to_vec(),
                INTEROPERABILITY_POINTER => {
                    entry.data = endian.u32_bytes(interoperability_offset as u32).to_vec()
                }
                _ => {}
            }
        }

        // TIFF header
        let mut tiff = endian.marker().to_vec();
        tiff.extend_from_slice(&endian.u16_bytes(42));
        tiff.extend_from_slice(&endian.u32_bytes(zeroth_offset as u32));

        // Directories, with out-of-line data collected as we go.
        let mut data_section: Vec<u8> = Vec::new();
        let mut directories: Vec<&[Entry]> = vec![&zeroth];
        if has_exif {
            directories.push(&exif);
        }
        if has_gps {
            directories.push(&gps);
        }
        if has_interoperability {
            directories.push(&interoperability);
        }

        for entries in directories {
            tiff.extend_from_slice(&endian.u16_bytes(entries.len() as u16));
            for entry in entries {
                tiff.extend_from_slice(&endian.u16_bytes(entry.code));
                tiff.extend_from_slice(&endian.u16_bytes(entry.tag_type as u16));
                tiff.extend_from_slice(&endian.u32_bytes(entry.count));

                if entry.data.len() <= 4 {
                    let mut inline = entry.data.clone();
                    inline.resize(4, 0);
                    tiff.extend_from_slice(&inline);
                } else {
                    let offset = data_offset + data_section.len();
                    tiff.extend_from_slice(&endian.u32_bytes(offset as u32));
                    data_section.extend_from_slice(&entry.data);
                }
            }
            // Next-IFD terminator
            tiff.extend_from_slice(&[0, 0, 0, 0]);
        }

        tiff.extend_from_slice(&data_section);
        jpeg_shell(&tiff)
    }
}

/// Wrap a TIFF payload in a minimal JPEG: SOI, then one Exif APP1 segment.
pub fn jpeg_shell(tiff: &[u8]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let field_length = (2 + 6 + tiff.len()) as u16;
    data.extend_from_slice(&field_length.to_be_bytes());
    data.extend_from_slice(b"Exif\0\0");
    data.extend_from_slice(tiff);
    data
}

/// A JPEG with a JFIF APP0 segment but no Exif metadata.
pub fn jpeg_without_exif() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    data.extend_from_slice(&[0xFF, 0xE0, 0x00, 0x10]);
    data.extend_from_slice(b"JFIF\0");
    data.extend_from_slice(&[0x01, 0x02, 0x01, 0x00, 0x48, 0x00, 0x48, 0x00, 0x00]);
    data
}

/// A camera-style file touching every directory kind.
pub fn sample_camera_jpeg(endian: Endian) -> Vec<u8> {
    ExifBuilder::new(endian)
        .zeroth(Entry::short(0x0100, 640, endian)) // ImageWidth
        .zeroth(Entry::short(0x0101, 480, endian)) // ImageLength
        .zeroth(Entry::ascii(0x010F, "Acme")) // Make
        .zeroth(Entry::ascii(0x0110, "Scope 9000")) // Model
        .zeroth(Entry::short(0x0112, 1, endian)) // Orientation
        .zeroth(Entry::rational(0x011A, 300, 1, endian)) // XResolution
        .zeroth(Entry::rational(0x011B, 300, 1, endian)) // YResolution
        .zeroth(Entry::short(0x0128, 2, endian)) // ResolutionUnit (inches)
        .exif(Entry::undefined(0x9000, b"0220")) // ExifVersion
        .exif(Entry::rational(0x829A, 1, 125, endian)) // ExposureTime
        .exif(Entry::short(0x9209, 0x19, endian)) // Flash
        .exif(Entry::signed_rational(0x9204, -1, 2, endian)) // ExposureBiasValue
        .gps(Entry::ascii(0x0001, "N")) // GPSLatitudeRef
        .gps(Entry::rationals(0x0002, &[(57, 1), (30, 1), (0, 1)], endian)) // GPSLatitude
        .interoperability(Entry::ascii(0x0001, "R98"))
        .build()
}
