//! Row sources: the forward-only cursors rows are read from.
//!
//! The `RowSource` trait is the input boundary of the crate. A driver
//! exposes its result set through it; `MemoryCursor` is an in-memory
//! implementation for rows that are already materialized.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};
use crate::types::{Blob, Clob, ColumnMetadata, SqlValue};

/// Fetch direction hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchDirection {
    /// Rows are read first to last, once.
    #[default]
    Forward,
    /// Rows are read last to first.
    Reverse,
    /// Access order is unknown.
    Unknown,
}

/// Forward-only tabular cursor with typed column accessors.
///
/// Column indexes are 1-based. Accessors return `Ok(None)` for SQL NULL.
/// Accessors are only valid after `next()` has returned `true`.
pub trait RowSource {
    /// Column metadata, one entry per column in index order.
    fn columns(&self) -> Result<&[ColumnMetadata]>;

    /// Move to the next row. Returns `false` when there are no more rows.
    fn next(&mut self) -> Result<bool>;

    /// Read a column as text, in the source's own textual form.
    fn get_string(&mut self, index: usize) -> Result<Option<String>>;

    /// Read a column as a boolean.
    fn get_boolean(&mut self, index: usize) -> Result<Option<bool>>;

    /// Read a column as a calendar date.
    fn get_date(&mut self, index: usize) -> Result<Option<NaiveDateTime>>;

    /// Read a column as a timestamp.
    fn get_timestamp(&mut self, index: usize) -> Result<Option<NaiveDateTime>>;

    /// Read a BLOB handle.
    fn get_blob(&mut self, index: usize) -> Result<Option<Blob>>;

    /// Read a CLOB handle.
    fn get_clob(&mut self, index: usize) -> Result<Option<Clob>>;

    /// Read a column as an opaque value.
    fn get_object(&mut self, index: usize) -> Result<Option<SqlValue>>;

    /// Rows to buffer per round trip.
    fn set_fetch_size(&mut self, rows: u32) -> Result<()>;

    /// Expected traversal direction.
    fn set_fetch_direction(&mut self, direction: FetchDirection) -> Result<()>;

    /// Release the cursor.
    fn close(&mut self) -> Result<()>;

    /// Check if the cursor has been released.
    fn is_closed(&self) -> bool;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    fn columns(&self) -> Result<&[ColumnMetadata]> {
        (**self).columns()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }

    fn get_string(&mut self, index: usize) -> Result<Option<String>> {
        (**self).get_string(index)
    }

    fn get_boolean(&mut self, index: usize) -> Result<Option<bool>> {
        (**self).get_boolean(index)
    }

    fn get_date(&mut self, index: usize) -> Result<Option<NaiveDateTime>> {
        (**self).get_date(index)
    }

    fn get_timestamp(&mut self, index: usize) -> Result<Option<NaiveDateTime>> {
        (**self).get_timestamp(index)
    }

    fn get_blob(&mut self, index: usize) -> Result<Option<Blob>> {
        (**self).get_blob(index)
    }

    fn get_clob(&mut self, index: usize) -> Result<Option<Clob>> {
        (**self).get_clob(index)
    }

    fn get_object(&mut self, index: usize) -> Result<Option<SqlValue>> {
        (**self).get_object(index)
    }

    fn set_fetch_size(&mut self, rows: u32) -> Result<()> {
        (**self).set_fetch_size(rows)
    }

    fn set_fetch_direction(&mut self, direction: FetchDirection) -> Result<()> {
        (**self).set_fetch_direction(direction)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

fn on_epoch(time: NaiveTime) -> NaiveDateTime {
    NaiveDate::default().and_time(time)
}

fn conversion(value: &SqlValue, target: &str) -> Error {
    Error::type_conversion(format!("cannot read {} as {}", value.kind_name(), target))
}

/// In-memory row source.
///
/// Reads convert between stored values and accessors the way SQL drivers
/// usually do: numbers and dates are readable as text, strings holding a
/// date are readable as dates, and so on.
///
/// # Example
///
/// ```
/// use rowset_text::{ColumnMetadata, MemoryCursor, RowSource, SqlValue};
/// use rowset_text::types::type_code;
///
/// let mut cursor = MemoryCursor::new(
///     vec![ColumnMetadata::new("ID", type_code::INTEGER)],
///     vec![vec![SqlValue::Number("7".into())]],
/// );
///
/// assert!(cursor.next().unwrap());
/// assert_eq!(cursor.get_string(1).unwrap().as_deref(), Some("7"));
/// assert!(!cursor.next().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCursor {
    /// Column metadata.
    columns: Vec<ColumnMetadata>,
    /// All rows.
    rows: Vec<Vec<SqlValue>>,
    /// Index of the next row to hand out.
    next_pos: usize,
    /// Index of the current row, if positioned on one.
    current: Option<usize>,
    /// Fetch size hint.
    fetch_size: u32,
    /// Fetch direction hint.
    fetch_direction: FetchDirection,
    /// Number of LOB handles handed out.
    lob_reads: u64,
    /// Whether the cursor has been released.
    closed: bool,
}

impl MemoryCursor {
    /// Create a cursor over `rows`.
    pub fn new(columns: Vec<ColumnMetadata>, rows: Vec<Vec<SqlValue>>) -> Self {
        Self {
            columns,
            rows,
            next_pos: 0,
            current: None,
            fetch_size: 0,
            fetch_direction: FetchDirection::default(),
            lob_reads: 0,
            closed: false,
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<SqlValue>) {
        self.rows.push(row);
    }

    /// Number of rows advanced over so far.
    pub fn rowcount(&self) -> u64 {
        self.next_pos.min(self.rows.len()) as u64
    }

    /// Current fetch size hint (0 if never set).
    pub fn fetch_size(&self) -> u32 {
        self.fetch_size
    }

    /// Current fetch direction hint.
    pub fn fetch_direction(&self) -> FetchDirection {
        self.fetch_direction
    }

    /// Number of BLOB/CLOB handles handed out.
    pub fn lob_reads(&self) -> u64 {
        self.lob_reads
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(Error::CursorClosed)
        } else {
            Ok(())
        }
    }

    /// Internal: look up a value on the current row.
    fn value(&self, index: usize) -> Result<&SqlValue> {
        self.ensure_open()?;
        if index == 0 || index > self.columns.len() {
            return Err(Error::ColumnIndexOutOfBounds {
                index,
                count: self.columns.len(),
            });
        }
        let row_idx = self.current.ok_or(Error::NoCurrentRow)?;
        self.rows[row_idx].get(index - 1).ok_or_else(|| {
            Error::source_access(format!(
                "row {} has {} values, column {} missing",
                row_idx + 1,
                self.rows[row_idx].len(),
                index
            ))
        })
    }
}

impl RowSource for MemoryCursor {
    fn columns(&self) -> Result<&[ColumnMetadata]> {
        self.ensure_open()?;
        Ok(&self.columns)
    }

    fn next(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if self.next_pos < self.rows.len() {
            self.current = Some(self.next_pos);
            self.next_pos += 1;
            Ok(true)
        } else {
            self.current = None;
            Ok(false)
        }
    }

    fn get_string(&mut self, index: usize) -> Result<Option<String>> {
        Ok(match self.value(index)? {
            SqlValue::Null => None,
            other => Some(other.to_string()),
        })
    }

    fn get_boolean(&mut self, index: usize) -> Result<Option<bool>> {
        let value = self.value(index)?;
        match value {
            SqlValue::Null => Ok(None),
            SqlValue::Boolean(b) => Ok(Some(*b)),
            SqlValue::Number(n) => n
                .trim()
                .parse::<f64>()
                .map(|v| Some(v != 0.0))
                .map_err(|_| conversion(value, "BOOLEAN")),
            SqlValue::String(s) | SqlValue::Object(s) => match s.trim() {
                "1" => Ok(Some(true)),
                "0" => Ok(Some(false)),
                t if t.eq_ignore_ascii_case("true") => Ok(Some(true)),
                t if t.eq_ignore_ascii_case("false") => Ok(Some(false)),
                _ => Err(conversion(value, "BOOLEAN")),
            },
            _ => Err(conversion(value, "BOOLEAN")),
        }
    }

    fn get_date(&mut self, index: usize) -> Result<Option<NaiveDateTime>> {
        let value = self.value(index)?;
        match value {
            SqlValue::Null => Ok(None),
            SqlValue::Date(d) => Ok(Some(midnight(*d))),
            SqlValue::Timestamp(ts) => Ok(Some(midnight(ts.date()))),
            SqlValue::Time(t) => Ok(Some(on_epoch(*t))),
            SqlValue::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map(|d| Some(midnight(d)))
                .map_err(|_| conversion(value, "DATE")),
            _ => Err(conversion(value, "DATE")),
        }
    }

    fn get_timestamp(&mut self, index: usize) -> Result<Option<NaiveDateTime>> {
        let value = self.value(index)?;
        match value {
            SqlValue::Null => Ok(None),
            SqlValue::Timestamp(ts) => Ok(Some(*ts)),
            SqlValue::Date(d) => Ok(Some(midnight(*d))),
            SqlValue::Time(t) => Ok(Some(on_epoch(*t))),
            SqlValue::String(s) => {
                NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S%.f")
                    .map(Some)
                    .map_err(|_| conversion(value, "TIMESTAMP"))
            }
            _ => Err(conversion(value, "TIMESTAMP")),
        }
    }

    fn get_blob(&mut self, index: usize) -> Result<Option<Blob>> {
        let blob = match self.value(index)? {
            SqlValue::Null => return Ok(None),
            SqlValue::Blob(data) => Blob::new(data.clone()),
            other => return Err(conversion(other, "BLOB")),
        };
        self.lob_reads += 1;
        Ok(Some(blob))
    }

    fn get_clob(&mut self, index: usize) -> Result<Option<Clob>> {
        let clob = match self.value(index)? {
            SqlValue::Null => return Ok(None),
            SqlValue::Clob(s) | SqlValue::String(s) => Clob::new(s.as_str()),
            other => return Err(conversion(other, "CLOB")),
        };
        self.lob_reads += 1;
        Ok(Some(clob))
    }

    fn get_object(&mut self, index: usize) -> Result<Option<SqlValue>> {
        Ok(match self.value(index)? {
            SqlValue::Null => None,
            other => Some(other.clone()),
        })
    }

    fn set_fetch_size(&mut self, rows: u32) -> Result<()> {
        self.ensure_open()?;
        self.fetch_size = rows;
        Ok(())
    }

    fn set_fetch_direction(&mut self, direction: FetchDirection) -> Result<()> {
        self.ensure_open()?;
        self.fetch_direction = direction;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.current = None;
        }
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
