//! Stored column values.

use bytes::Bytes;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;

/// A single column value as held by a row source.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Character value (VARCHAR, CHAR, etc.).
    String(String),
    /// Number value as text (preserves precision and source formatting).
    Number(String),
    /// Boolean value.
    Boolean(bool),
    /// Calendar date.
    Date(NaiveDate),
    /// Time of day.
    Time(NaiveTime),
    /// Timestamp without zone.
    Timestamp(NaiveDateTime),
    /// Binary large object content.
    Blob(Bytes),
    /// Character large object content.
    Clob(String),
    /// Opaque driver value, carried as its textual form.
    Object(String),
}

impl SqlValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) | SqlValue::Number(s) | SqlValue::Clob(s) | SqlValue::Object(s) => {
                Some(s)
            }
            _ => None,
        }
    }

    /// Short name of the variant, used in conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::String(_) => "STRING",
            SqlValue::Number(_) => "NUMBER",
            SqlValue::Boolean(_) => "BOOLEAN",
            SqlValue::Date(_) => "DATE",
            SqlValue::Time(_) => "TIME",
            SqlValue::Timestamp(_) => "TIMESTAMP",
            SqlValue::Blob(_) => "BLOB",
            SqlValue::Clob(_) => "CLOB",
            SqlValue::Object(_) => "OBJECT",
        }
    }
}

/// Write a timestamp the way SQL drivers print one by default:
/// `yyyy-mm-dd hh:mm:ss.f`, fractional digits trimmed but at least one kept.
fn write_timestamp(f: &mut impl fmt::Write, ts: &NaiveDateTime) -> fmt::Result {
    write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S"))?;
    let nanos = ts.nanosecond() % 1_000_000_000;
    if nanos == 0 {
        return f.write_str(".0");
    }
    let digits = format!("{:09}", nanos);
    write!(f, ".{}", digits.trim_end_matches('0'))
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::String(s) => write!(f, "{}", s),
            SqlValue::Number(n) => write!(f, "{}", n),
            SqlValue::Boolean(b) => write!(f, "{}", b),
            SqlValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            SqlValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            SqlValue::Timestamp(ts) => write_timestamp(f, ts),
            SqlValue::Blob(data) => write!(f, "<BLOB: {} bytes>", data.len()),
            SqlValue::Clob(s) => write!(f, "{}", s),
            SqlValue::Object(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_value_null() {
        let val = SqlValue::Null;
        assert!(val.is_null());
        assert_eq!(val.as_str(), None);
        assert_eq!(format!("{}", val), "NULL");
    }

    #[test]
    fn test_sql_value_number_keeps_text() {
        let val = SqlValue::Number("00123.4500".to_string());
        assert_eq!(val.as_str(), Some("00123.4500"));
        assert_eq!(val.to_string(), "00123.4500");
    }

    #[test]
    fn test_timestamp_display() {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(10, 4, 5)
            .unwrap();
        assert_eq!(SqlValue::Timestamp(ts).to_string(), "2023-01-05 10:04:05.0");

        let ts = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_milli_opt(10, 4, 5, 120)
            .unwrap();
        assert_eq!(SqlValue::Timestamp(ts).to_string(), "2023-01-05 10:04:05.12");
    }

    #[test]
    fn test_blob_display() {
        let val = SqlValue::Blob(Bytes::from_static(&[1, 2, 3]));
        assert_eq!(val.to_string(), "<BLOB: 3 bytes>");
        assert_eq!(val.kind_name(), "BLOB");
    }
}
