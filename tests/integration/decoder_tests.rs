//! End-to-end decoder tests over synthetic camera files.

use exifscope::exif::{decode, derive_ppi, tag_map, Value};
use exifscope::{ExifError, FormatError};

use super::test_utils::{sample_camera_jpeg, Endian, Entry, ExifBuilder};

// =============================================================================
// Full-file Decoding
// =============================================================================

#[test]
fn test_decode_camera_file_big_endian() {
    let data = sample_camera_jpeg(Endian::BigEndian);
    let result = decode(&data).unwrap();

    assert_eq!(result.value("ImageWidth"), Some(&Value::Scalar(640.0)));
    assert_eq!(result.value("ImageLength"), Some(&Value::Scalar(480.0)));
    assert_eq!(result.description("Make"), Some("Acme"));
    assert_eq!(result.description("Model"), Some("Scope 9000"));
    assert_eq!(result.description("Orientation"), Some("top-left"));
    assert_eq!(result.value("XResolution"), Some(&Value::Scalar(300.0)));
    assert_eq!(result.description("ResolutionUnit"), Some("inches"));

    // Exif directory, reached through the pointer tag.
    assert_eq!(result.description("ExifVersion"), Some("0220"));
    assert_eq!(result.value("ExposureTime"), Some(&Value::Scalar(0.008)));
    assert_eq!(
        result.description("Flash"),
        Some("Flash fired, auto mode")
    );
    assert_eq!(
        result.value("ExposureBiasValue"),
        Some(&Value::Scalar(-0.5))
    );

    // GPS directory.
    assert_eq!(result.description("GPSLatitudeRef"), Some("North latitude"));
    assert_eq!(result.description("GPSLatitude"), Some("57.5"));

    // Interoperability directory, reached through the Exif directory.
    assert_eq!(result.description("InteroperabilityIndex"), Some("R98"));
}

#[test]
fn test_decode_camera_file_little_endian() {
    // The same file content under the 0x4D4D marker decodes identically.
    let big = decode(&sample_camera_jpeg(Endian::BigEndian)).unwrap();
    let little = decode(&sample_camera_jpeg(Endian::LittleEndian)).unwrap();
    assert_eq!(big, little);
}

#[test]
fn test_short_sequence_order_is_preserved() {
    let endian = Endian::BigEndian;
    let data = ExifBuilder::new(endian)
        .zeroth(Entry::shorts(0x0102, &[8, 9, 10], endian)) // BitsPerSample
        .build();

    let result = decode(&data).unwrap();
    assert_eq!(
        result.value("BitsPerSample"),
        Some(&Value::Numbers(vec![8.0, 9.0, 10.0]))
    );
}

#[test]
fn test_two_element_short_stays_inline() {
    // Two Shorts are exactly 4 bytes, the inline limit.
    let endian = Endian::BigEndian;
    let data = ExifBuilder::new(endian)
        .zeroth(Entry::shorts(0x0212, &[2, 1], endian)) // YCbCrSubSampling
        .build();

    let result = decode(&data).unwrap();
    assert_eq!(
        result.value("YCbCrSubSampling"),
        Some(&Value::Numbers(vec![2.0, 1.0]))
    );
}

#[test]
fn test_rational_precision() {
    let endian = Endian::BigEndian;
    let data = ExifBuilder::new(endian)
        .zeroth(Entry::rational(0x011A, 10, 1, endian))
        .zeroth(Entry::rational(0x011B, 20, 4, endian))
        .build();

    let result = decode(&data).unwrap();
    assert_eq!(result.value("XResolution"), Some(&Value::Scalar(10.0)));
    assert_eq!(result.value("YResolution"), Some(&Value::Scalar(5.0)));
}

#[test]
fn test_unknown_tags_degrade_to_synthesized_names() {
    let endian = Endian::BigEndian;
    let data = ExifBuilder::new(endian)
        .zeroth(Entry::short(0x9999, 42, endian))
        .build();

    let result = decode(&data).unwrap();
    assert_eq!(
        result.value("undefined-39321"),
        Some(&Value::Scalar(42.0))
    );
}

// =============================================================================
// Density Derivation
// =============================================================================

#[test]
fn test_tag_map_uses_flattened_names() {
    let data = sample_camera_jpeg(Endian::BigEndian);
    let tags = tag_map(&decode(&data).unwrap());

    assert_eq!(tags.get("image width"), Some(&Value::Scalar(640.0)));
    assert_eq!(tags.get("x resolution"), Some(&Value::Scalar(300.0)));
    assert_eq!(
        tags.get("make"),
        Some(&Value::Strings(vec!["Acme".to_string()]))
    );
}

#[test]
fn test_decoded_resolution_unit_is_numeric_so_ppi_is_unknown() {
    // The in-process decoder keeps ResolutionUnit as its raw code, which the
    // density math does not accept as a unit word.
    let data = sample_camera_jpeg(Endian::BigEndian);
    let tags = tag_map(&decode(&data).unwrap());
    assert_eq!(derive_ppi(&tags), None);
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn test_non_jpeg_fails() {
    let err = decode(b"\x89PNG\r\n\x1a\n").unwrap_err();
    assert_eq!(err, ExifError::Format(FormatError::InvalidImageFormat));
}

#[test]
fn test_jpeg_without_exif_fails() {
    let err = decode(&super::test_utils::jpeg_without_exif()).unwrap_err();
    assert_eq!(err, ExifError::Format(FormatError::NoExifData));
}

#[test]
fn test_truncated_file_is_reported_not_panicked() {
    // Cut a valid file short anywhere past the APP1 header; the decode must
    // surface an error instead of panicking.
    let data = sample_camera_jpeg(Endian::BigEndian);
    for cut in 13..data.len() {
        let _ = decode(&data[..cut]);
    }

    let err = decode(&data[..40]).unwrap_err();
    assert!(matches!(
        err,
        ExifError::OutOfBounds { .. } | ExifError::Format(_)
    ));
}
