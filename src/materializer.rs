//! Row materialization: turns each cursor row into one string per column.
//!
//! The materializer owns the row source and a single row buffer. Every
//! successful `advance` overwrites the buffer in place and returns a view of
//! it, so a row is only valid until the next call. Callers that keep rows
//! must copy them (see [`OwnedRows`]).
//!
//! # Example
//!
//! ```
//! use rowset_text::{ColumnMetadata, ExportOptions, MemoryCursor, RowMaterializer, SqlValue};
//! use rowset_text::types::type_code;
//!
//! let cursor = MemoryCursor::new(
//!     vec![
//!         ColumnMetadata::new("ID", type_code::INTEGER),
//!         ColumnMetadata::new("NAME", type_code::VARCHAR),
//!     ],
//!     vec![vec![SqlValue::Number("1".into()), SqlValue::String("  ada ".into())]],
//! );
//!
//! let mut rows = RowMaterializer::open(cursor, ExportOptions::default())?;
//! while let Some(row) = rows.advance()? {
//!     assert_eq!(row, ["1", "ada"]);
//! }
//! # Ok::<(), rowset_text::Error>(())
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::classifier::SchemaClassifier;
use crate::config::ExportOptions;
use crate::cursor::RowSource;
use crate::error::{Error, Result};
use crate::format::{to_upper_hex, FormatState};
use crate::types::{Category, Schema};

/// Streams rows out of a [`RowSource`] as strings.
#[derive(Debug)]
pub struct RowMaterializer<S: RowSource> {
    /// The cursor being read.
    source: S,
    /// Classified columns.
    schema: Arc<Schema>,
    /// Instance defaults used by `advance`.
    options: Arc<ExportOptions>,
    /// Lazily compiled date/time formatters.
    formats: FormatState,
    /// Row buffer, one slot per column, reused for every row.
    row: Vec<String>,
    /// Rows materialized so far.
    rows_read: u64,
    /// Set once the end-of-data signal or an error has been returned.
    exhausted: bool,
    /// Time spent classifying and materializing.
    elapsed: Duration,
}

impl<S: RowSource> RowMaterializer<S> {
    /// Classify `source` and prepare to read it.
    pub fn open(mut source: S, options: ExportOptions) -> Result<Self> {
        let classifier = SchemaClassifier::new(&mut source, options.fetch_size)?;
        let mut materializer = Self::new(source, classifier.schema(), options);
        materializer.elapsed = classifier.elapsed();
        Ok(materializer)
    }

    /// Create a materializer from an already classified schema.
    pub fn new(source: S, schema: Arc<Schema>, options: ExportOptions) -> Self {
        let row = vec![String::new(); schema.len()];
        Self {
            source,
            schema,
            options: Arc::new(options),
            formats: FormatState::new(),
            row,
            rows_read: 0,
            exhausted: false,
            elapsed: Duration::ZERO,
        }
    }

    /// Materialize the next row using the instance options.
    ///
    /// Returns `Ok(None)` once, when the cursor runs out of rows; the cursor
    /// is closed at that point and later calls fail with
    /// `Error::CursorClosed`.
    pub fn advance(&mut self) -> Result<Option<&[String]>> {
        let options = Arc::clone(&self.options);
        self.advance_with(options.trim, &options.date_format, &options.timestamp_format)
    }

    /// Like [`advance`](Self::advance) with an explicit trim flag.
    pub fn advance_trim(&mut self, trim: bool) -> Result<Option<&[String]>> {
        let options = Arc::clone(&self.options);
        self.advance_with(trim, &options.date_format, &options.timestamp_format)
    }

    /// Materialize the next row with explicit settings.
    ///
    /// Each temporal formatter is compiled from the first pattern it sees and
    /// kept for the rest of the cursor; patterns passed on later calls are
    /// ignored for categories that already have one.
    ///
    /// An error ends the iteration: the row buffer is left as is and later
    /// calls fail with `Error::CursorClosed`. Releasing the cursor after a
    /// failure is up to the caller (see [`close`](Self::close)).
    pub fn advance_with(
        &mut self,
        trim: bool,
        date_format: &str,
        timestamp_format: &str,
    ) -> Result<Option<&[String]>> {
        if self.exhausted {
            return Err(Error::CursorClosed);
        }
        let start = Instant::now();
        let filled = self.fill_row(trim, date_format, timestamp_format);
        self.elapsed += start.elapsed();

        match filled {
            Ok(true) => Ok(Some(self.row.as_slice())),
            Ok(false) => Ok(None),
            Err(e) => {
                self.exhausted = true;
                log::warn!("row {} failed: {}", self.rows_read + 1, e);
                Err(e)
            }
        }
    }

    /// Move the source forward and overwrite the row buffer.
    ///
    /// Returns `false` (after closing the source) when there are no more rows.
    fn fill_row(&mut self, trim: bool, date_format: &str, timestamp_format: &str) -> Result<bool> {
        if !self.source.next()? {
            self.exhausted = true;
            self.source.close()?;
            log::debug!("cursor exhausted after {} rows", self.rows_read);
            return Ok(false);
        }

        let schema = Arc::clone(&self.schema);
        for (slot, column) in schema.columns().iter().enumerate() {
            let mut value = self
                .read_value(column.category, column.index, date_format, timestamp_format)?
                .unwrap_or_default();
            if trim {
                let trimmed = value.trim_matches(|c: char| c <= ' ');
                if trimmed.len() != value.len() {
                    value = trimmed.to_string();
                }
            }
            self.row[slot] = value;
        }

        self.rows_read += 1;
        Ok(true)
    }

    /// Read and format one column of the current row.
    fn read_value(
        &mut self,
        category: Category,
        index: usize,
        date_format: &str,
        timestamp_format: &str,
    ) -> Result<Option<String>> {
        let source = &mut self.source;
        Ok(match category {
            Category::Object => source.get_object(index)?.map(|v| v.to_string()),
            Category::Boolean => source.get_boolean(index)?.map(|b| b.to_string()),
            Category::Number | Category::String => source.get_string(index)?,
            Category::Date => {
                let value = source.get_date(index)?;
                let pattern = self.formats.date(date_format)?;
                value.map(|d| pattern.format(&d))
            }
            Category::Timestamp => {
                let value = source.get_timestamp(index)?;
                let pattern = self.formats.timestamp(timestamp_format)?;
                value.map(|ts| pattern.format(&ts))
            }
            Category::TimestampTZ => {
                let value = source.get_timestamp(index)?;
                let pattern = self.formats.timestamp_tz(timestamp_format)?;
                value.map(|ts| pattern.format(&ts))
            }
            Category::Blob => match source.get_blob(index)? {
                Some(mut blob) => {
                    let len = blob.len()?;
                    let data = blob.get_bytes(1, len as usize)?;
                    blob.free();
                    Some(to_upper_hex(&data))
                }
                None => None,
            },
            Category::Clob => match source.get_clob(index)? {
                Some(mut clob) => {
                    let len = clob.len()?;
                    let text = clob.get_sub_string(1, len as usize)?;
                    clob.free();
                    Some(text)
                }
                None => None,
            },
        })
    }

    /// Release the cursor without reading the remaining rows.
    pub fn close(&mut self) -> Result<()> {
        self.exhausted = true;
        self.source.close()
    }

    /// Classified columns.
    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Instance options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Cached formatters.
    pub fn format_state(&self) -> &FormatState {
        &self.formats
    }

    /// Number of rows materialized so far.
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Cumulative time spent classifying and materializing.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Check if iteration is over: end of data, an error, or `close`.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Give the source back.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Iterate over owned copies of the remaining rows.
    pub fn into_rows(self) -> OwnedRows<S> {
        OwnedRows {
            inner: self,
            done: false,
        }
    }
}

/// Iterator over owned rows.
///
/// Each item is a copy of the row buffer. Iteration stops after the end of
/// data or after the first error.
#[derive(Debug)]
pub struct OwnedRows<S: RowSource> {
    inner: RowMaterializer<S>,
    done: bool,
}

impl<S: RowSource> OwnedRows<S> {
    /// The materializer being drained.
    pub fn materializer(&self) -> &RowMaterializer<S> {
        &self.inner
    }
}

impl<S: RowSource> Iterator for OwnedRows<S> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.inner.advance() {
            Ok(Some(row)) => Some(Ok(row.to_vec())),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
