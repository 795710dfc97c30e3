//! Resolution derivation and the flattened tag vocabulary.
//!
//! Consumers of the tag mapping (the resolution math, the HTTP JSON
//! surfaces) speak a flattened vocabulary: CamelCase table names become
//! lowercase space-separated words ("XResolution" → "x resolution"), the
//! same convention the external extraction tool prints. [`derive_ppi`]
//! accepts both historical vocabularies because the in-process decoder and
//! the external tool never agreed on one.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::decoder::DecodeResult;
use super::value::Value;

/// Flattened tag mapping: lowercase spaced name → value.
pub type TagMap = BTreeMap<String, Value>;

// =============================================================================
// Name Flattening
// =============================================================================

/// Convert a CamelCase tag name to lowercase space-separated words.
///
/// Word breaks fall before an uppercase letter that starts a lowercase run
/// and between a lowercase/uppercase pair; lone capitals just lowercase in
/// place, so acronym runs stay glued ("GPSLatitudeRef" → "gps latitude
/// ref"). Names without capitals, such as synthesized "undefined-<code>"
/// entries, pass through unchanged.
pub fn spaced_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let current = chars[i];
        let next = chars.get(i + 1).copied();

        match next {
            Some(n) if current.is_ascii_uppercase() && n.is_ascii_lowercase() => {
                out.push(' ');
                out.push(current.to_ascii_lowercase());
                out.push(n);
                i += 2;
            }
            Some(n) if current.is_ascii_lowercase() && n.is_ascii_uppercase() => {
                out.push(current);
                out.push(' ');
                out.push(n.to_ascii_lowercase());
                i += 2;
            }
            _ if current.is_ascii_uppercase() => {
                out.push(current.to_ascii_lowercase());
                i += 1;
            }
            _ => {
                out.push(current);
                i += 1;
            }
        }
    }

    out.trim().to_string()
}

/// Flatten a decode result into the spaced-name vocabulary.
pub fn tag_map(result: &DecodeResult) -> TagMap {
    result
        .iter()
        .map(|(name, tag)| (spaced_name(name), tag.value.clone()))
        .collect()
}

// =============================================================================
// PPI Derivation
// =============================================================================

/// Pixels-per-inch conversion ratio for a resolution unit.
///
/// (pixels / unit) * (units / inch) = pixels / inch.
fn unit_ratio(unit: &str) -> Option<f64> {
    match unit.to_lowercase().as_str() {
        "meters" => Some(0.0254),
        "inches" => Some(1.0),
        _ => None,
    }
}

/// Derive the image's pixels-per-inch from a flattened tag mapping.
///
/// Returns `None` ("unknown") when no resolution unit is present, the unit
/// is not a recognized word, or no resolution pair exists. The two axes are
/// averaged; well-formed files carry equal values.
pub fn derive_ppi(tags: &TagMap) -> Option<u32> {
    let unit = tags
        .get("resolution unit")
        .or_else(|| tags.get("pixel units"))?;
    let ratio = unit_ratio(unit.as_text()?)?;

    let (x, y) = resolution_pair(tags, "x resolution", "y resolution")
        .or_else(|| resolution_pair(tags, "pixels per unit x", "pixels per unit y"))?;

    let mean = (x + y) / 2.0;
    Some((mean * ratio).round() as u32)
}

/// Both axes of a resolution pair as numbers, if present.
fn resolution_pair(tags: &TagMap, x_name: &str, y_name: &str) -> Option<(f64, f64)> {
    let x = tags.get(x_name)?.as_number()?;
    let y = tags.get(y_name)?.as_number()?;
    Some((x, y))
}

// =============================================================================
// Display Density
// =============================================================================

/// Coarse OS family, keying the assumed display density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Mac,
    Windows,
    Linux,
}

impl FromStr for OsFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mac" => Ok(OsFamily::Mac),
            "windows" => Ok(OsFamily::Windows),
            "linux" => Ok(OsFamily::Linux),
            other => Err(format!(
                "unknown OS family '{}' (expected mac, windows, or linux)",
                other
            )),
        }
    }
}

/// The display density an OS family assumes, in pixels per inch.
pub const fn default_density(os: OsFamily) -> u32 {
    match os {
        OsFamily::Mac => 72,
        OsFamily::Windows => 96,
        OsFamily::Linux => 96,
    }
}

/// Factor to scale an image so its physical size matches the display.
///
/// An image denser than the display shrinks (ratio < 1), a sparser one
/// grows.
pub fn display_scale(display_density: u32, image_ppi: u32) -> f64 {
    display_density as f64 / image_ppi as f64
}

// =============================================================================
// Tests
// =============================================================================
