use super::{ReadFormatExt, WriteFormatExt};
use crate::model::ModelError;
use crate::reader::ReaderError;
use std::io::Cursor;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

#[test]
fn test_string_is_prefixed_with_utf16_unit_count() {
    let mut bytes = Vec::new();
    bytes.write_string("Cyclohexanöl").unwrap();

    // 12 characters, 12 UTF-16 code units, although 'ö' takes two UTF-8 bytes
    assert_eq!(&bytes[..4], &[0, 0, 0, 12]);
    assert_eq!(bytes.len(), 4 + 12 * 2);
    // 'ö' is U+00F6, written big-endian
    assert_eq!(&bytes[4 + 10 * 2..4 + 11 * 2], &[0x00, 0xF6]);

    let mut cursor = Cursor::new(bytes);
    assert_eq!(cursor.read_string().unwrap(), "Cyclohexanöl");
}

#[test]
fn test_supplementary_characters_use_surrogate_pairs() {
    let mut bytes = Vec::new();
    bytes.write_string("C\u{1D4D2}").unwrap();
    assert_eq!(&bytes[..4], &[0, 0, 0, 3]);

    let mut cursor = Cursor::new(bytes);
    assert_eq!(cursor.read_string().unwrap(), "C\u{1D4D2}");
}

#[test]
fn test_empty_string() {
    let mut bytes = Vec::new();
    bytes.write_string("").unwrap();
    assert_eq!(bytes, vec![0, 0, 0, 0]);
    assert_eq!(Cursor::new(bytes).read_string().unwrap(), "");
}

#[test]
fn test_truncated_string_is_malformed_stream() {
    let mut bytes = Vec::new();
    bytes.write_string("abcdef").unwrap();
    bytes.truncate(9);

    let err = Cursor::new(bytes).read_string().unwrap_err();
    assert!(matches!(err, ReaderError::MalformedStream(_)));
}

#[test]
fn test_negative_length_is_malformed_stream() {
    let bytes = vec![0xFF, 0xFF, 0xFF, 0xFE];
    let err = Cursor::new(bytes).read_string().unwrap_err();
    assert!(matches!(err, ReaderError::MalformedStream(_)));
}

#[test]
fn test_unpaired_surrogate_keeps_stream_position() {
    let mut bytes = vec![0, 0, 0, 2, 0xD8, 0x00, 0x00, 0x41];
    bytes.write_int(7).unwrap();

    let mut cursor = Cursor::new(bytes);
    let value = cursor.read_string().unwrap();
    assert_eq!(value, "\u{FFFD}A");
    assert_eq!(cursor.read_int().unwrap(), 7);
}

#[test]
fn test_numeric_layout_is_big_endian() {
    let mut bytes = Vec::new();
    bytes.write_int(1000).unwrap();
    bytes.write_float(1.0).unwrap();
    bytes.write_double(-2.0).unwrap();
    bytes.write_long(1).unwrap();
    bytes.write_boolean(true).unwrap();
    bytes.write_boolean(false).unwrap();

    assert_eq!(&bytes[0..4], &[0x00, 0x00, 0x03, 0xE8]);
    assert_eq!(&bytes[4..8], &[0x3F, 0x80, 0x00, 0x00]);
    assert_eq!(&bytes[8..16], &[0xC0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(&bytes[16..24], &[0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(&bytes[24..], &[1, 0]);

    let mut cursor = Cursor::new(bytes);
    assert_eq!(cursor.read_int().unwrap(), 1000);
    assert_eq!(cursor.read_float().unwrap(), 1.0);
    assert_eq!(cursor.read_double().unwrap(), -2.0);
    assert_eq!(cursor.read_long().unwrap(), 1);
    assert!(cursor.read_boolean().unwrap());
    assert!(!cursor.read_boolean().unwrap());
    assert!(matches!(cursor.read_int(), Err(ReaderError::MalformedStream(_))));
}

#[test]
fn test_date_is_epoch_milliseconds() {
    let date = Utc.with_ymd_and_hms(2018, 3, 1, 12, 30, 0).unwrap();
    let mut bytes = Vec::new();
    bytes.write_date(&date).unwrap();

    let mut cursor = Cursor::new(bytes.clone());
    assert_eq!(cursor.read_long().unwrap(), date.timestamp_millis());
    assert_eq!(Cursor::new(bytes).read_date().unwrap(), Ok(date));
}

#[test]
fn test_out_of_range_date_is_left_to_the_record() {
    let mut bytes = Vec::new();
    bytes.write_long(i64::MAX).unwrap();
    bytes.write_int(3).unwrap();

    let mut cursor = Cursor::new(bytes);
    assert_eq!(
        cursor.read_date().unwrap(),
        Err(ModelError::InvalidTimestamp(i64::MAX))
    );
    assert_eq!(cursor.read_int().unwrap(), 3);
}

#[test]
fn test_truncated_date_breaks_the_stream() {
    let mut cursor = Cursor::new(vec![0, 0, 1]);
    assert!(matches!(cursor.read_date(), Err(ReaderError::MalformedStream(_))));
}

#[test]
fn test_lists_are_count_prefixed() {
    let mut bytes = Vec::new();
    bytes
        .write_list(&[(43.0_f64, 1.5_f32), (57.0, 2.5)], |out, (mz, abundance)| {
            out.write_double(*mz)?;
            out.write_float(*abundance)
        })
        .unwrap();
    assert_eq!(bytes.len(), 4 + 2 * 12);

    let mut cursor = Cursor::new(bytes);
    let ions = cursor
        .read_list(|input| Ok((input.read_double()?, input.read_float()?)))
        .unwrap();
    assert_eq!(ions, vec![(43.0, 1.5), (57.0, 2.5)]);
}

#[test]
fn test_huge_count_does_not_preallocate() {
    let mut bytes = Vec::new();
    bytes.write_int(i32::MAX).unwrap();
    let err = Cursor::new(bytes).read_list(|input| input.read_int()).unwrap_err();
    assert!(matches!(err, ReaderError::MalformedStream(_)));
}

proptest! {
    /// Any string survives the UTF-16 encoding unchanged
    #[test]
    fn test_string_roundtrip(value in any::<String>()) {
        let mut bytes = Vec::new();
        bytes.write_string(&value).unwrap();
        prop_assert_eq!(bytes.len(), 4 + value.encode_utf16().count() * 2);

        let decoded = Cursor::new(bytes).read_string().unwrap();
        prop_assert_eq!(decoded, value);
    }
}
