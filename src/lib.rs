//! Row-to-text materialization for tabular cursors.
//!
//! Converts rows of a forward-only cursor into one string per column,
//! ready for a delimited-text writer. Each column's native type code is
//! classified once into a [`Category`], which then decides how values are
//! read and formatted: numbers keep the source's text, dates and timestamps
//! go through configurable patterns, BLOBs become uppercase hex, and NULLs
//! become empty strings.
//!
//! # Example
//!
//! ```
//! use rowset_text::{ColumnMetadata, ExportOptions, MemoryCursor, Result, RowMaterializer, SqlValue};
//! use rowset_text::types::type_code;
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<()> {
//!     let cursor = MemoryCursor::new(
//!         vec![
//!             ColumnMetadata::new("ID", type_code::NUMERIC),
//!             ColumnMetadata::new("BORN", type_code::DATE),
//!             ColumnMetadata::new("NOTE", type_code::VARCHAR),
//!         ],
//!         vec![vec![
//!             SqlValue::Number("42".into()),
//!             SqlValue::Date(NaiveDate::from_ymd_opt(2023, 1, 5).unwrap()),
//!             SqlValue::Null,
//!         ]],
//!     );
//!
//!     let mut rows = RowMaterializer::open(cursor, ExportOptions::default())?;
//!     while let Some(row) = rows.advance()? {
//!         println!("{}", row.join(","));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod config;
pub mod cursor;
pub mod error;
pub mod format;
pub mod materializer;
pub mod stream;
pub mod types;

// Re-export main types
pub use classifier::SchemaClassifier;
pub use config::ExportOptions;
pub use cursor::{FetchDirection, MemoryCursor, RowSource};
pub use error::{Error, ErrorKind, Result};
pub use materializer::{OwnedRows, RowMaterializer};
pub use stream::RowStreamExt;
pub use types::{Blob, Category, Clob, ColumnDescriptor, ColumnMetadata, Schema, SqlValue};
