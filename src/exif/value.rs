//! Tag value types and the decoded value representation.
//!
//! An IFD entry declares one of eight TIFF value types. The type's byte
//! width times the entry's count decides whether the value is stored inline
//! in the entry or behind an offset, and how the raw bytes turn into
//! numbers or characters.

use std::fmt;

// =============================================================================
// TagType
// =============================================================================

/// TIFF value types supported by the decoder.
///
/// Each type has a fixed per-element size in bytes. Entries declaring a type
/// outside this table abort the decode; the set matches what Exif writers
/// actually emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TagType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// 8-bit character (1 byte)
    Ascii = 2,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Unsigned fraction: two u32s, numerator then denominator (8 bytes)
    Rational = 5,

    /// Opaque byte data (1 byte per element)
    Undefined = 7,

    /// Signed 32-bit integer (4 bytes)
    SignedLong = 9,

    /// Signed fraction: two i32s, numerator then denominator (8 bytes)
    SignedRational = 10,
}

impl TagType {
    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            TagType::Byte => 1,
            TagType::Ascii => 1,
            TagType::Short => 2,
            TagType::Long => 4,
            TagType::Rational => 8,
            TagType::Undefined => 1,
            TagType::SignedLong => 4,
            TagType::SignedRational => 8,
        }
    }

    /// Create a TagType from its numeric value.
    ///
    /// Returns `None` for type codes outside the table.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(TagType::Byte),
            2 => Some(TagType::Ascii),
            3 => Some(TagType::Short),
            4 => Some(TagType::Long),
            5 => Some(TagType::Rational),
            7 => Some(TagType::Undefined),
            9 => Some(TagType::SignedLong),
            10 => Some(TagType::SignedRational),
            _ => None,
        }
    }

    /// Maximum total byte size that fits inline in an IFD entry's
    /// value/offset field.
    pub const INLINE_THRESHOLD: usize = 4;

    /// Check if `count` values of this type fit inline in an IFD entry.
    #[inline]
    pub fn fits_inline(self, count: usize) -> bool {
        self.size_in_bytes() * count <= Self::INLINE_THRESHOLD
    }
}

// =============================================================================
// Value
// =============================================================================

/// A decoded tag value.
///
/// The decoder collapses the type/count matrix into a closed set of shapes:
/// single non-character values unwrap to `Scalar`, repeated ones become
/// `Numbers`, and character data always becomes `Strings` after splitting on
/// NUL separators (even for a single string). `Text` is the shape the
/// external extraction tool produces, where everything arrives as a line of
/// text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number. Integer types widen losslessly; rational types carry
    /// the result of the numerator/denominator division.
    Scalar(f64),

    /// A single piece of text (external-tool values).
    Text(String),

    /// An ordered sequence of numbers.
    Numbers(Vec<f64>),

    /// NUL-separated character data as separate strings.
    Strings(Vec<String>),
}

impl Value {
    /// The value as a number, if it has one.
    ///
    /// Text is parsed leniently so that tool output like `"300"` counts as a
    /// number, matching how the resolution math coerces its inputs.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Scalar(n) => Some(*n),
            Value::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// The value as text, if it is textual.
    ///
    /// A `Strings` value counts when it holds exactly one string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Strings(parts) if parts.len() == 1 => Some(&parts[0]),
            _ => None,
        }
    }

    /// The value as an ordered number sequence, if it is one.
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Value::Numbers(ns) => Some(ns),
            _ => None,
        }
    }

    /// The value as a string sequence, if it is one.
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Value::Strings(ss) => Some(ss),
            _ => None,
        }
    }

    /// Whether the value holds more than one element.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Numbers(_) | Value::Strings(_))
    }

    /// Join sequence elements with `sep`; scalars and text render as-is.
    pub fn join(&self, sep: &str) -> String {
        match self {
            Value::Scalar(n) => format_number(*n),
            Value::Text(s) => s.clone(),
            Value::Numbers(ns) => ns
                .iter()
                .map(|n| format_number(*n))
                .collect::<Vec<_>>()
                .join(sep),
            Value::Strings(ss) => ss.join(sep),
        }
    }

    /// Convert into a JSON value for the HTTP and CLI surfaces.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Scalar(n) => json_number(*n),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Numbers(ns) => {
                serde_json::Value::Array(ns.iter().map(|n| json_number(*n)).collect())
            }
            Value::Strings(ss) => {
                if ss.len() == 1 {
                    serde_json::Value::String(ss[0].clone())
                } else {
                    serde_json::Value::Array(
                        ss.iter()
                            .map(|s| serde_json::Value::String(s.clone()))
                            .collect(),
                    )
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join(", "))
    }
}

/// Render a number without a trailing `.0` for whole values.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Whole numbers serialize as JSON integers, everything else as floats.
fn json_number(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

// =============================================================================
// Tests
// =============================================================================
