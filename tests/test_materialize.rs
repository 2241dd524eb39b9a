//! Integration tests for row materialization over an in-memory cursor.
//!
//! Run with: cargo test --test test_materialize

use bytes::Bytes;
use chrono::{NaiveDate, NaiveTime};
use rowset_text::types::type_code;
use rowset_text::{
    Category, ColumnMetadata, Error, ExportOptions, MemoryCursor, RowMaterializer, RowSource,
    SqlValue,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn single_column(code: i32, values: Vec<SqlValue>) -> MemoryCursor {
    MemoryCursor::new(
        vec![ColumnMetadata::new("C", code)],
        values.into_iter().map(|v| vec![v]).collect(),
    )
}

#[test]
fn test_numbers_keep_source_text() {
    init_logging();
    for code in [
        type_code::BIGINT,
        type_code::DECIMAL,
        type_code::DOUBLE,
        type_code::FLOAT,
        type_code::REAL,
        type_code::NUMERIC,
        type_code::INTEGER,
        type_code::TINYINT,
        type_code::SMALLINT,
    ] {
        let cursor = single_column(
            code,
            vec![
                SqlValue::Number("0012.500".into()),
                SqlValue::Number("1E+10".into()),
                SqlValue::Number("-0".into()),
            ],
        );
        let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
        assert_eq!(rows.schema().categories(), vec![Category::Number]);
        assert_eq!(rows.advance().unwrap().unwrap(), ["0012.500"]);
        assert_eq!(rows.advance().unwrap().unwrap(), ["1E+10"]);
        assert_eq!(rows.advance().unwrap().unwrap(), ["-0"]);
        assert!(rows.advance().unwrap().is_none());
    }
}

#[test]
fn test_nulls_become_empty_in_every_category() {
    init_logging();
    let codes = [
        type_code::JAVA_OBJECT,
        type_code::BOOLEAN,
        type_code::NUMERIC,
        type_code::DATE,
        type_code::TIME,
        type_code::TIMESTAMP,
        type_code::VENDOR_TIMESTAMP_TZ,
        type_code::BLOB,
        type_code::CLOB,
        type_code::VARCHAR,
    ];
    let columns = codes
        .iter()
        .enumerate()
        .map(|(i, code)| ColumnMetadata::new(format!("C{}", i + 1), *code))
        .collect();
    let cursor = MemoryCursor::new(columns, vec![vec![SqlValue::Null; codes.len()]]);

    for trim in [true, false] {
        let mut rows = RowMaterializer::open(cursor.clone(), ExportOptions::default()).unwrap();
        let row = rows.advance_trim(trim).unwrap().unwrap();
        assert_eq!(row.len(), codes.len());
        assert!(row.iter().all(String::is_empty), "row: {:?}", row);
    }
}

#[test]
fn test_blob_hex() {
    let cursor = single_column(
        type_code::BLOB,
        vec![SqlValue::Blob(Bytes::from_static(&[0x0A, 0xFF]))],
    );
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["0AFF"]);
}

#[test]
fn test_date_default_pattern() {
    let cursor = single_column(type_code::DATE, vec![SqlValue::Date(date(2023, 1, 5))]);
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["2023-01-05"]);
}

#[test]
fn test_time_uses_date_pattern() {
    let cursor = single_column(
        type_code::TIME,
        vec![SqlValue::Time(NaiveTime::from_hms_opt(13, 45, 0).unwrap())],
    );
    let options = ExportOptions::default().with_date_format("HH:mm");
    let mut rows = RowMaterializer::open(cursor, options).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["13:45"]);
}

#[test]
fn test_timestamp_default_pattern() {
    let value = date(2023, 1, 5).and_hms_milli_opt(8, 7, 6, 500).unwrap();
    let cursor = single_column(type_code::TIMESTAMP, vec![SqlValue::Timestamp(value)]);
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["2023-01-05 08:07:06.500"]);
}

#[test]
fn test_timestamp_pattern_first_wins() {
    let cursor = single_column(
        type_code::TIMESTAMP,
        vec![
            SqlValue::Timestamp(date(2023, 1, 5).and_hms_opt(1, 0, 0).unwrap()),
            SqlValue::Timestamp(date(2024, 6, 30).and_hms_opt(2, 0, 0).unwrap()),
            SqlValue::Timestamp(date(2025, 12, 1).and_hms_opt(3, 0, 0).unwrap()),
        ],
    );
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();

    assert_eq!(rows.advance_with(true, "yyyy-MM-dd", "yyyy").unwrap().unwrap(), ["2023"]);
    assert_eq!(
        rows.advance_with(true, "yyyy-MM-dd", "MM/dd/yyyy").unwrap().unwrap(),
        ["2024"]
    );
    assert_eq!(rows.advance().unwrap().unwrap(), ["2025"]);
}

#[test]
fn test_zoned_timestamp_suffix() {
    let value = date(2023, 1, 5).and_hms_milli_opt(8, 7, 6, 42).unwrap();
    let cursor = single_column(type_code::VENDOR_TIMESTAMP_LTZ, vec![SqlValue::Timestamp(value)]);
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["2023-01-05 08:07:06.42 42"]);
}

#[test]
fn test_patterns_do_not_leak_between_cursors() {
    let make = || {
        single_column(
            type_code::DATE,
            vec![SqlValue::Date(date(2023, 1, 5))],
        )
    };

    let mut first = RowMaterializer::open(make(), ExportOptions::default()).unwrap();
    assert_eq!(
        first.advance_with(true, "dd/MM/yyyy", "yyyy").unwrap().unwrap(),
        ["05/01/2023"]
    );

    let mut second = RowMaterializer::open(make(), ExportOptions::default()).unwrap();
    assert_eq!(second.advance().unwrap().unwrap(), ["2023-01-05"]);
}

#[test]
fn test_trimming() {
    let cursor = single_column(
        type_code::VARCHAR,
        vec![SqlValue::String("  abc  ".into()), SqlValue::String("  abc  ".into())],
    );
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance_trim(true).unwrap().unwrap(), ["abc"]);
    assert_eq!(rows.advance_trim(false).unwrap().unwrap(), ["  abc  "]);

    let cursor = single_column(type_code::CHAR, vec![SqlValue::String("  abc  ".into())]);
    let options = ExportOptions::default().with_trim(false);
    let mut rows = RowMaterializer::open(cursor, options).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["  abc  "]);
}

#[test]
fn test_trimming_strips_control_chars_only() {
    let cursor = single_column(
        type_code::VARCHAR,
        vec![
            SqlValue::String("\u{a0}abc\u{a0}".into()),
            SqlValue::String("\u{0}abc\u{1f}".into()),
            SqlValue::String("\t\r\n abc \n".into()),
        ],
    );
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["\u{a0}abc\u{a0}"]);
    assert_eq!(rows.advance().unwrap().unwrap(), ["abc"]);
    assert_eq!(rows.advance().unwrap().unwrap(), ["abc"]);
}

#[test]
fn test_boolean_and_object() {
    let cursor = MemoryCursor::new(
        vec![
            ColumnMetadata::new("B", type_code::BOOLEAN),
            ColumnMetadata::new("BIT", type_code::BIT),
            ColumnMetadata::new("O", type_code::JAVA_OBJECT),
        ],
        vec![vec![
            SqlValue::Boolean(false),
            SqlValue::Boolean(true),
            SqlValue::Object("point(1 2)".into()),
        ]],
    );
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["false", "true", "point(1 2)"]);
}

#[test]
fn test_unknown_codes_read_as_string() {
    let cursor = MemoryCursor::new(
        vec![
            ColumnMetadata::new("X", 4242),
            ColumnMetadata::new("RAW", type_code::VARBINARY),
        ],
        vec![vec![SqlValue::String("opaque".into()), SqlValue::String("01AB".into())]],
    );
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.schema().categories(), vec![Category::String, Category::String]);
    assert_eq!(rows.advance().unwrap().unwrap(), ["opaque", "01AB"]);
}

#[test]
fn test_exhaustion_signal_once() {
    init_logging();
    let cursor = single_column(type_code::INTEGER, vec![SqlValue::Number("1".into())]);
    let mut rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();

    assert!(rows.advance().unwrap().is_some());
    assert!(rows.advance().unwrap().is_none());
    assert!(rows.is_exhausted());
    assert!(rows.source().is_closed());
    assert!(matches!(rows.advance(), Err(Error::CursorClosed)));
    assert_eq!(rows.rows_read(), 1);
}

#[test]
fn test_fetch_hint_applied() {
    let cursor = single_column(type_code::INTEGER, vec![]);
    let rows = RowMaterializer::open(cursor, ExportOptions::default()).unwrap();
    assert_eq!(rows.source().fetch_size(), 10_000);

    let cursor = single_column(type_code::INTEGER, vec![]);
    let options = ExportOptions::default().with_fetch_size(64);
    let rows = RowMaterializer::open(cursor, options).unwrap();
    assert_eq!(rows.source().fetch_size(), 64);
}

#[test]
fn test_borrowed_source() {
    let mut cursor = single_column(type_code::INTEGER, vec![SqlValue::Number("9".into())]);
    {
        let mut rows = RowMaterializer::open(&mut cursor, ExportOptions::default()).unwrap();
        assert_eq!(rows.advance().unwrap().unwrap(), ["9"]);
        assert!(rows.advance().unwrap().is_none());
    }
    assert!(cursor.is_closed());
    assert_eq!(cursor.rowcount(), 1);
}
