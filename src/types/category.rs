//! Semantic categories that drive value formatting.
//!
//! Every native type code maps to exactly one category. Codes that are not
//! listed fall back to [`Category::String`].

use std::fmt;

use super::type_code::*;

/// Semantic category of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Opaque value, rendered through its default textual form.
    Object,
    /// Boolean, rendered as `true` / `false`.
    Boolean,
    /// Numeric, read as source-provided text.
    Number,
    /// Calendar date (also used for TIME columns).
    Date,
    /// Timestamp without zone.
    Timestamp,
    /// Timestamp with (local) time zone.
    TimestampTZ,
    /// Binary large object, rendered as uppercase hex.
    Blob,
    /// Character large object.
    Clob,
    /// Anything else, read as text.
    String,
}

impl Category {
    /// Map a native type code to its category.
    pub fn from_type_code(code: i32) -> Self {
        match code {
            BIT | JAVA_OBJECT => Category::Object,
            BOOLEAN => Category::Boolean,
            BIGINT | DECIMAL | DOUBLE | FLOAT | REAL | NUMERIC | INTEGER | TINYINT | SMALLINT => {
                Category::Number
            }
            TIME | DATE => Category::Date,
            TIMESTAMP | VENDOR_TIMESTAMP => Category::Timestamp,
            VENDOR_TIMESTAMP_TZ | VENDOR_TIMESTAMP_LTZ => Category::TimestampTZ,
            BLOB => Category::Blob,
            NCLOB | CLOB => Category::Clob,
            _ => Category::String,
        }
    }

    /// Short lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Object => "object",
            Category::Boolean => "boolean",
            Category::Number => "number",
            Category::Date => "date",
            Category::Timestamp => "timestamp",
            Category::TimestampTZ => "timestamptz",
            Category::Blob => "blob",
            Category::Clob => "clob",
            Category::String => "string",
        }
    }

    /// Whether values of this category are read through a large-object handle.
    pub fn is_lob(&self) -> bool {
        matches!(self, Category::Blob | Category::Clob)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
