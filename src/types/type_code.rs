//! Native SQL type codes reported by column metadata.
//!
//! The standard codes follow the values used by JDBC-style drivers; the
//! negative `-100..=-102` codes are Oracle driver extensions.

pub const BIT: i32 = -7;
pub const TINYINT: i32 = -6;
pub const SMALLINT: i32 = 5;
pub const INTEGER: i32 = 4;
pub const BIGINT: i32 = -5;
pub const FLOAT: i32 = 6;
pub const REAL: i32 = 7;
pub const DOUBLE: i32 = 8;
pub const NUMERIC: i32 = 2;
pub const DECIMAL: i32 = 3;
pub const CHAR: i32 = 1;
pub const VARCHAR: i32 = 12;
pub const LONGVARCHAR: i32 = -1;
pub const DATE: i32 = 91;
pub const TIME: i32 = 92;
pub const TIMESTAMP: i32 = 93;
pub const BINARY: i32 = -2;
pub const VARBINARY: i32 = -3;
pub const LONGVARBINARY: i32 = -4;
pub const NULL: i32 = 0;
pub const OTHER: i32 = 1111;
pub const JAVA_OBJECT: i32 = 2000;
pub const DISTINCT: i32 = 2001;
pub const STRUCT: i32 = 2002;
pub const ARRAY: i32 = 2003;
pub const BLOB: i32 = 2004;
pub const CLOB: i32 = 2005;
pub const REF: i32 = 2006;
pub const DATALINK: i32 = 70;
pub const BOOLEAN: i32 = 16;
pub const ROWID: i32 = -8;
pub const NCHAR: i32 = -15;
pub const NVARCHAR: i32 = -9;
pub const LONGNVARCHAR: i32 = -16;
pub const NCLOB: i32 = 2011;
pub const SQLXML: i32 = 2009;

// Vendor extensions
pub const VENDOR_TIMESTAMP: i32 = -100;
pub const VENDOR_TIMESTAMP_TZ: i32 = -101;
pub const VENDOR_TIMESTAMP_LTZ: i32 = -102;

/// Human-readable name of a type code, for diagnostics.
pub fn type_name(code: i32) -> &'static str {
    match code {
        BIT => "BIT",
        TINYINT => "TINYINT",
        SMALLINT => "SMALLINT",
        INTEGER => "INTEGER",
        BIGINT => "BIGINT",
        FLOAT => "FLOAT",
        REAL => "REAL",
        DOUBLE => "DOUBLE",
        NUMERIC => "NUMERIC",
        DECIMAL => "DECIMAL",
        CHAR => "CHAR",
        VARCHAR => "VARCHAR",
        LONGVARCHAR => "LONGVARCHAR",
        DATE => "DATE",
        TIME => "TIME",
        TIMESTAMP => "TIMESTAMP",
        BINARY => "BINARY",
        VARBINARY => "VARBINARY",
        LONGVARBINARY => "LONGVARBINARY",
        NULL => "NULL",
        OTHER => "OTHER",
        JAVA_OBJECT => "JAVA_OBJECT",
        DISTINCT => "DISTINCT",
        STRUCT => "STRUCT",
        ARRAY => "ARRAY",
        BLOB => "BLOB",
        CLOB => "CLOB",
        REF => "REF",
        DATALINK => "DATALINK",
        BOOLEAN => "BOOLEAN",
        ROWID => "ROWID",
        NCHAR => "NCHAR",
        NVARCHAR => "NVARCHAR",
        LONGNVARCHAR => "LONGNVARCHAR",
        NCLOB => "NCLOB",
        SQLXML => "SQLXML",
        VENDOR_TIMESTAMP => "TIMESTAMP",
        VENDOR_TIMESTAMP_TZ => "TIMESTAMP WITH TIME ZONE",
        VENDOR_TIMESTAMP_LTZ => "TIMESTAMP WITH LOCAL TIME ZONE",
        _ => "UNKNOWN",
    }
}
