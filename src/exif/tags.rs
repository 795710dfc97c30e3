//! Tag name tables and per-tag description formatting.
//!
//! Each of the four directory kinds has its own vocabulary mapping a 16-bit
//! tag code to a name, and for enum-coded tags a formatter that renders the
//! raw value as a label. The tables are plain match statements resolved at
//! compile time; nothing here is ever mutated.

use super::value::{format_number, Value};

// =============================================================================
// IfdKind
// =============================================================================

/// The four kinds of image file directory the decoder walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfdKind {
    /// The 0th (main image) directory.
    Zeroth,
    /// The Exif-specific directory, reached through "Exif IFD Pointer".
    Exif,
    /// The GPS directory, reached through "GPS Info IFD Pointer".
    Gps,
    /// The interoperability directory, reached through
    /// "Interoperability IFD Pointer" in the Exif directory.
    Interoperability,
}

impl IfdKind {
    /// Short lowercase label used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            IfdKind::Zeroth => "0th",
            IfdKind::Exif => "exif",
            IfdKind::Gps => "gps",
            IfdKind::Interoperability => "interoperability",
        }
    }
}

// =============================================================================
// TagDef
// =============================================================================

/// A tag table entry: a name, optionally paired with a formatter that turns
/// the decoded value into a human-readable description.
#[derive(Clone, Copy)]
pub struct TagDef {
    /// Canonical tag name.
    pub name: &'static str,

    /// Formatter for enum-coded or structured values. Tags without one
    /// describe themselves by joining their value with ", ".
    pub describe: Option<fn(&Value) -> String>,
}

const fn plain(name: &'static str) -> Option<TagDef> {
    Some(TagDef {
        name,
        describe: None,
    })
}

const fn described(name: &'static str, describe: fn(&Value) -> String) -> Option<TagDef> {
    Some(TagDef {
        name,
        describe: Some(describe),
    })
}

/// Look up a tag code in the table for the given directory kind.
///
/// Returns `None` for codes outside the vocabulary; unknown tags are not an
/// error, the decoder synthesizes a name for them.
pub fn tag_def(kind: IfdKind, code: u16) -> Option<TagDef> {
    match kind {
        IfdKind::Zeroth => zeroth_tag(code),
        IfdKind::Exif => exif_tag(code),
        IfdKind::Gps => gps_tag(code),
        IfdKind::Interoperability => interoperability_tag(code),
    }
}

// =============================================================================
// 0th IFD
// =============================================================================

fn zeroth_tag(code: u16) -> Option<TagDef> {
    match code {
        0x0100 => plain("ImageWidth"),
        0x0101 => plain("ImageLength"),
        0x0102 => plain("BitsPerSample"),
        0x0103 => plain("Compression"),
        0x0106 => plain("PhotometricInterpretation"),
        0x010E => plain("ImageDescription"),
        0x010F => plain("Make"),
        0x0110 => plain("Model"),
        0x0111 => plain("StripOffsets"),
        0x0112 => described("Orientation", describe_orientation),
        0x0115 => plain("SamplesPerPixel"),
        0x0116 => plain("RowsPerStrip"),
        0x0117 => plain("StripByteCounts"),
        0x011A => plain("XResolution"),
        0x011B => plain("YResolution"),
        0x011C => plain("PlanarConfiguration"),
        0x0128 => described("ResolutionUnit", describe_resolution_unit),
        0x012D => plain("TransferFunction"),
        0x0131 => plain("Software"),
        0x0132 => plain("DateTime"),
        0x013B => plain("Artist"),
        0x013E => plain("WhitePoint"),
        0x013F => plain("PrimaryChromaticities"),
        0x0201 => plain("JPEGInterchangeFormat"),
        0x0202 => plain("JPEGInterchangeFormatLength"),
        0x0211 => plain("YCbCrCoefficients"),
        0x0212 => plain("YCbCrSubSampling"),
        0x0213 => described("YCbCrPositioning", describe_ycbcr_positioning),
        0x0214 => plain("ReferenceBlackWhite"),
        0x8298 => described("Copyright", describe_copyright),
        0x8769 => plain("Exif IFD Pointer"),
        0x8825 => plain("GPS Info IFD Pointer"),
        _ => None,
    }
}

// =============================================================================
// Exif IFD
// =============================================================================

fn exif_tag(code: u16) -> Option<TagDef> {
    match code {
        0x829A => plain("ExposureTime"),
        0x829D => plain("FNumber"),
        0x8822 => described("ExposureProgram", describe_exposure_program),
        0x8824 => plain("SpectralSensitivity"),
        0x8827 => plain("ISOSpeedRatings"),
        0x8828 => described("OECF", |_| "[Raw OECF table data]".to_string()),
        0x9000 => described("ExifVersion", describe_char_codes),
        0x9003 => plain("DateTimeOriginal"),
        0x9004 => plain("DateTimeDigitized"),
        0x9101 => described("ComponentsConfiguration", describe_components_configuration),
        0x9102 => plain("CompressedBitsPerPixel"),
        0x9201 => plain("ShutterSpeedValue"),
        0x9202 => plain("ApertureValue"),
        0x9203 => plain("BrightnessValue"),
        0x9204 => plain("ExposureBiasValue"),
        0x9205 => plain("MaxApertureValue"),
        0x9206 => plain("SubjectDistance"),
        0x9207 => described("MeteringMode", describe_metering_mode),
        0x9208 => described("LightSource", describe_light_source),
        0x9209 => described("Flash", describe_flash),
        0x920A => plain("FocalLength"),
        0x9214 => described("SubjectArea", describe_subject_area),
        0x927C => described("MakerNote", |_| "[Raw maker note data]".to_string()),
        0x9286 => described("UserComment", describe_encoded_text),
        0x9290 => plain("SubSecTime"),
        0x9291 => plain("SubSecTimeOriginal"),
        0x9292 => plain("SubSecTimeDigitized"),
        0xA000 => described("FlashpixVersion", describe_char_codes),
        0xA001 => described("ColorSpace", describe_color_space),
        0xA002 => plain("PixelXDimension"),
        0xA003 => plain("PixelYDimension"),
        0xA004 => plain("RelatedSoundFile"),
        0xA005 => plain("Interoperability IFD Pointer"),
        0xA20B => plain("FlashEnergy"),
        0xA20C => described("SpatialFrequencyResponse", |_| {
            "[Raw SFR table data]".to_string()
        }),
        0xA20E => plain("FocalPlaneXResolution"),
        0xA20F => plain("FocalPlaneYResolution"),
        0xA210 => described("FocalPlaneResolutionUnit", describe_resolution_unit),
        0xA214 => described("SubjectLocation", describe_subject_location),
        0xA215 => plain("ExposureIndex"),
        0xA217 => described("SensingMethod", describe_sensing_method),
        0xA300 => described("FileSource", describe_file_source),
        0xA301 => described("SceneType", describe_scene_type),
        0xA302 => described("CFAPattern", |_| "[Raw CFA pattern table data]".to_string()),
        0xA401 => described("CustomRendered", describe_custom_rendered),
        0xA402 => described("ExposureMode", describe_exposure_mode),
        0xA403 => described("WhiteBalance", describe_white_balance),
        0xA404 => described("DigitalZoomRatio", describe_digital_zoom_ratio),
        0xA405 => described("FocalLengthIn35mmFilm", describe_focal_length_35mm),
        0xA406 => described("SceneCaptureType", describe_scene_capture_type),
        0xA407 => described("GainControl", describe_gain_control),
        0xA408 => described("Contrast", describe_contrast),
        0xA409 => described("Saturation", describe_saturation),
        0xA40A => described("Sharpness", describe_sharpness),
        0xA40B => described("DeviceSettingDescription", |_| {
            "[Raw device settings table data]".to_string()
        }),
        0xA40C => described("SubjectDistanceRange", describe_subject_distance_range),
        0xA420 => plain("ImageUniqueID"),
        _ => None,
    }
}

// =============================================================================
// GPS IFD
// =============================================================================

fn gps_tag(code: u16) -> Option<TagDef> {
    match code {
        0x0000 => described("GPSVersionID", describe_gps_version_id),
        0x0001 => described("GPSLatitudeRef", describe_latitude_ref),
        0x0002 => described("GPSLatitude", describe_degrees),
        0x0003 => described("GPSLongitudeRef", describe_longitude_ref),
        0x0004 => described("GPSLongitude", describe_degrees),
        0x0005 => described("GPSAltitudeRef", describe_gps_altitude_ref),
        0x0006 => described("GPSAltitude", describe_gps_altitude),
        0x0007 => described("GPSTimeStamp", describe_gps_timestamp),
        0x0008 => plain("GPSSatellites"),
        0x0009 => described("GPSStatus", describe_gps_status),
        0x000A => described("GPSMeasureMode", describe_gps_measure_mode),
        0x000B => plain("GPSDOP"),
        0x000C => described("GPSSpeedRef", describe_gps_speed_ref),
        0x000D => plain("GPSSpeed"),
        0x000E => described("GPSTrackRef", describe_direction_ref),
        0x000F => plain("GPSTrack"),
        0x0010 => described("GPSImgDirectionRef", describe_direction_ref),
        0x0011 => plain("GPSImgDirection"),
        0x0012 => plain("GPSMapDatum"),
        0x0013 => described("GPSDestLatitudeRef", describe_latitude_ref),
        0x0014 => described("GPSDestLatitude", describe_degrees),
        0x0015 => described("GPSDestLongitudeRef", describe_longitude_ref),
        0x0016 => described("GPSDestLongitude", describe_degrees),
        0x0017 => described("GPSDestBearingRef", describe_direction_ref),
        0x0018 => plain("GPSDestBearing"),
        0x0019 => described("GPSDestDistanceRef", describe_gps_dest_distance_ref),
        0x001A => plain("GPSDestDistance"),
        0x001B => described("GPSProcessingMethod", describe_encoded_text),
        0x001C => described("GPSAreaInformation", describe_encoded_text),
        0x001D => plain("GPSDateStamp"),
        0x001E => described("GPSDifferential", describe_gps_differential),
        _ => None,
    }
}

// =============================================================================
// Interoperability IFD
// =============================================================================

fn interoperability_tag(code: u16) -> Option<TagDef> {
    match code {
        0x0001 => plain("InteroperabilityIndex"),
        0x0002 => plain("UnknownInteroperabilityTag0x0002"),
        0x1001 => plain("UnknownInteroperabilityTag0x1001"),
        0x1002 => plain("UnknownInteroperabilityTag0x1002"),
        _ => None,
    }
}

// =============================================================================
// Formatter Helpers
// =============================================================================

const UNKNOWN: &str = "Unknown";

/// The value as an integer code, for enum-style formatters.
fn code_of(value: &Value) -> Option<i64> {
    let n = value.as_number()?;
    if n.fract() == 0.0 {
        Some(n as i64)
    } else {
        None
    }
}

/// Concatenated character data, for single-letter reference tags.
fn joined_text(value: &Value) -> String {
    value.join("")
}

/// Render numeric char codes as a string (version tags stored as bytes).
fn describe_char_codes(value: &Value) -> String {
    match value {
        Value::Numbers(ns) => ns.iter().map(|&n| (n as u8) as char).collect(),
        Value::Scalar(n) => ((*n as u8) as char).to_string(),
        _ => String::new(),
    }
}

// =============================================================================
// 0th IFD Formatters
// =============================================================================

fn describe_orientation(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "top-left",
        Some(2) => "top-right",
        Some(3) => "bottom-right",
        Some(4) => "bottom-left",
        Some(5) => "left-top",
        Some(6) => "right-top",
        Some(7) => "right-bottom",
        Some(8) => "left-bottom",
        _ => "Undefined",
    }
    .to_string()
}

fn describe_resolution_unit(value: &Value) -> String {
    match code_of(value) {
        Some(2) => "inches",
        Some(3) => "centimeters",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_ycbcr_positioning(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "centered",
        Some(2) => "co-sited",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_copyright(value: &Value) -> String {
    value.join("; ")
}

// =============================================================================
// Exif IFD Formatters
// =============================================================================

fn describe_exposure_program(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Undefined",
        Some(1) => "Manual",
        Some(2) => "Normal program",
        Some(3) => "Aperture priority",
        Some(4) => "Shutter priority",
        Some(5) => "Creative program",
        Some(6) => "Action program",
        Some(7) => "Portrait mode",
        Some(8) => "Landscape mode",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_components_configuration(value: &Value) -> String {
    let codes = match value {
        Value::Numbers(ns) => ns.as_slice(),
        _ => return String::new(),
    };
    let mut out = String::new();
    for &code in codes {
        match code as i64 {
            0x31 => out.push('Y'),
            0x32 => out.push_str("Cb"),
            0x33 => out.push_str("Cr"),
            0x34 => out.push('R'),
            0x35 => out.push('G'),
            0x36 => out.push('B'),
            _ => {}
        }
    }
    out
}

fn describe_metering_mode(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "Average",
        Some(2) => "CenterWeightedAverage",
        Some(3) => "Spot",
        Some(4) => "MultiSpot",
        Some(5) => "Pattern",
        Some(6) => "Partial",
        Some(255) => "Other",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_light_source(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "Daylight",
        Some(2) => "Fluorescent",
        Some(3) => "Tungsten (incandescent light)",
        Some(4) => "Flash",
        Some(9) => "Fine weather",
        Some(10) => "Cloudy weather",
        Some(11) => "Shade",
        Some(12) => "Daylight fluorescent (D 5700 – 7100K)",
        Some(13) => "Day white fluorescent (N 4600 – 5400K)",
        Some(14) => "Cool white fluorescent (W 3900 – 4500K)",
        Some(15) => "White fluorescent (WW 3200 – 3700K)",
        Some(17) => "Standard light A",
        Some(18) => "Standard light B",
        Some(19) => "Standard light C",
        Some(20) => "D55",
        Some(21) => "D65",
        Some(22) => "D75",
        Some(23) => "D50",
        Some(24) => "ISO studio tungsten",
        Some(255) => "Other light source",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_flash(value: &Value) -> String {
    match code_of(value) {
        Some(0x00) => "Flash did not fire",
        Some(0x01) => "Flash fired",
        Some(0x05) => "Strobe return light not detected",
        Some(0x07) => "Strobe return light detected",
        Some(0x09) => "Flash fired, compulsory flash mode",
        Some(0x0D) => "Flash fired, compulsory flash mode, return light not detected",
        Some(0x0F) => "Flash fired, compulsory flash mode, return light detected",
        Some(0x10) => "Flash did not fire, compulsory flash mode",
        Some(0x18) => "Flash did not fire, auto mode",
        Some(0x19) => "Flash fired, auto mode",
        Some(0x1D) => "Flash fired, auto mode, return light not detected",
        Some(0x1F) => "Flash fired, auto mode, return light detected",
        Some(0x20) => "No flash function",
        Some(0x41) => "Flash fired, red-eye reduction mode",
        Some(0x45) => "Flash fired, red-eye reduction mode, return light not detected",
        Some(0x47) => "Flash fired, red-eye reduction mode, return light detected",
        Some(0x49) => "Flash fired, compulsory flash mode, red-eye reduction mode",
        Some(0x4D) => {
            "Flash fired, compulsory flash mode, red-eye reduction mode, return light not detected"
        }
        Some(0x4F) => {
            "Flash fired, compulsory flash mode, red-eye reduction mode, return light detected"
        }
        Some(0x59) => "Flash fired, auto mode, red-eye reduction mode",
        Some(0x5D) => "Flash fired, auto mode, return light not detected, red-eye reduction mode",
        Some(0x5F) => "Flash fired, auto mode, return light detected, red-eye reduction mode",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_subject_area(value: &Value) -> String {
    let ns = match value.as_numbers() {
        Some(ns) => ns,
        None => return UNKNOWN.to_string(),
    };
    match ns.len() {
        2 => format!(
            "Location; X: {}, Y: {}",
            format_number(ns[0]),
            format_number(ns[1])
        ),
        3 => format!(
            "Circle; X: {}, Y: {}, diameter: {}",
            format_number(ns[0]),
            format_number(ns[1]),
            format_number(ns[2])
        ),
        4 => format!(
            "Rectangle; X: {}, Y: {}, width: {}, height: {}",
            format_number(ns[0]),
            format_number(ns[1]),
            format_number(ns[2]),
            format_number(ns[3])
        ),
        _ => UNKNOWN.to_string(),
    }
}

/// Comment-style tags prefix their payload with an 8-byte character set id.
fn describe_encoded_text(value: &Value) -> String {
    let codes = match value {
        Value::Numbers(ns) => ns.as_slice(),
        _ => return UNKNOWN.to_string(),
    };
    let prefix: String = codes
        .iter()
        .take(8)
        .map(|&c| (c as u8) as char)
        .collect();
    match prefix.as_str() {
        "ASCII\0\0\0" => codes
            .iter()
            .skip(8)
            .map(|&c| (c as u8) as char)
            .collect(),
        "JIS\0\0\0\0\0" => "[JIS encoded text]".to_string(),
        "UNICODE\0" => "[Unicode encoded text]".to_string(),
        "\0\0\0\0\0\0\0\0" => "[Undefined encoding]".to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn describe_color_space(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "sRGB",
        Some(0xFFFF) => "Uncalibrated",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_subject_location(value: &Value) -> String {
    match value.as_numbers() {
        Some(ns) if ns.len() >= 2 => {
            format!("X: {}, Y: {}", format_number(ns[0]), format_number(ns[1]))
        }
        _ => UNKNOWN.to_string(),
    }
}

fn describe_sensing_method(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "Undefined",
        Some(2) => "One-chip color area sensor",
        Some(3) => "Two-chip color area sensor",
        Some(4) => "Three-chip color area sensor",
        Some(5) => "Color sequential area sensor",
        Some(7) => "Trilinear sensor",
        Some(8) => "Color sequential linear sensor",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_file_source(value: &Value) -> String {
    match code_of(value) {
        Some(3) => "DSC",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_scene_type(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "A directly photographed image",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_custom_rendered(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Normal process",
        Some(1) => "Custom process",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_exposure_mode(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Auto exposure",
        Some(1) => "Manual exposure",
        Some(2) => "Auto bracket",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_white_balance(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Auto white balance",
        Some(1) => "Manual white balance",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_digital_zoom_ratio(value: &Value) -> String {
    match value.as_number() {
        Some(n) if n == 0.0 => "Digital zoom was not used".to_string(),
        _ => value.join(", "),
    }
}

fn describe_focal_length_35mm(value: &Value) -> String {
    match value.as_number() {
        Some(n) if n == 0.0 => UNKNOWN.to_string(),
        _ => value.join(", "),
    }
}

fn describe_scene_capture_type(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Standard",
        Some(1) => "Landscape",
        Some(2) => "Portrait",
        Some(3) => "Night scene",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_gain_control(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "None",
        Some(1) => "Low gain up",
        Some(2) => "High gain up",
        Some(3) => "Low gain down",
        Some(4) => "High gain down",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_contrast(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Normal",
        Some(1) => "Soft",
        Some(2) => "Hard",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_saturation(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Normal",
        Some(1) => "Low saturation",
        Some(2) => "High saturation",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_sharpness(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Normal",
        Some(1) => "Soft",
        Some(2) => "Hard",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_subject_distance_range(value: &Value) -> String {
    match code_of(value) {
        Some(1) => "Macro",
        Some(2) => "Close view",
        Some(3) => "Distant view",
        _ => UNKNOWN,
    }
    .to_string()
}

// =============================================================================
// GPS IFD Formatters
// =============================================================================

fn describe_gps_version_id(value: &Value) -> String {
    match value.as_numbers() {
        Some(ns) if ns == [2.0, 2.0, 0.0, 0.0] => "Version 2.2".to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn describe_latitude_ref(value: &Value) -> String {
    match joined_text(value).as_str() {
        "N" => "North latitude",
        "S" => "South latitude",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_longitude_ref(value: &Value) -> String {
    match joined_text(value).as_str() {
        "E" => "East longitude",
        "W" => "West longitude",
        _ => UNKNOWN,
    }
    .to_string()
}

/// Degrees/minutes/seconds rationals collapse to decimal degrees.
fn describe_degrees(value: &Value) -> String {
    match value.as_numbers() {
        Some(ns) if ns.len() >= 3 => format_number(ns[0] + ns[1] / 60.0 + ns[2] / 3600.0),
        _ => UNKNOWN.to_string(),
    }
}

fn describe_gps_altitude_ref(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Sea level",
        Some(1) => "Sea level reference (negative value)",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_gps_altitude(value: &Value) -> String {
    format!("{} m", value.join(", "))
}

fn describe_gps_timestamp(value: &Value) -> String {
    let ns = match value.as_numbers() {
        Some(ns) => ns,
        None => return UNKNOWN.to_string(),
    };
    ns.iter()
        .map(|&n| pad_two_digits(n))
        .collect::<Vec<_>>()
        .join(":")
}

/// Pad the whole part of a timestamp component to two digits.
fn pad_two_digits(n: f64) -> String {
    let rendered = format_number(n);
    let whole_digits = (n.trunc().abs() as i64).to_string().len();
    if whole_digits >= 2 {
        rendered
    } else {
        format!("{}{}", "0".repeat(2 - whole_digits), rendered)
    }
}

fn describe_gps_status(value: &Value) -> String {
    match joined_text(value).as_str() {
        "A" => "Measurement in progress",
        "V" => "Measurement Interoperability",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_gps_measure_mode(value: &Value) -> String {
    match joined_text(value).as_str() {
        "2" => "2-dimensional measurement",
        "3" => "3-dimensional measurement",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_gps_speed_ref(value: &Value) -> String {
    match joined_text(value).as_str() {
        "K" => "Kilometers per hour",
        "M" => "Miles per hour",
        "N" => "Knots",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_direction_ref(value: &Value) -> String {
    match joined_text(value).as_str() {
        "T" => "True direction",
        "M" => "Magnetic direction",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_gps_dest_distance_ref(value: &Value) -> String {
    match joined_text(value).as_str() {
        "K" => "Kilometers",
        "M" => "Miles",
        "N" => "Knots",
        _ => UNKNOWN,
    }
    .to_string()
}

fn describe_gps_differential(value: &Value) -> String {
    match code_of(value) {
        Some(0) => "Measurement without differential correction",
        Some(1) => "Differential correction applied",
        _ => UNKNOWN,
    }
    .to_string()
}

// =============================================================================
// Tests
// =============================================================================
