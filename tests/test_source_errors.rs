//! Integration tests for data-source failures and format configuration errors.

use chrono::NaiveDateTime;
use rowset_text::types::type_code;
use rowset_text::{
    Blob, Clob, ColumnMetadata, Error, ErrorKind, ExportOptions, FetchDirection, MemoryCursor,
    Result, RowMaterializer, RowSource, SqlValue,
};

/// Wraps a `MemoryCursor` and fails at configurable points.
#[derive(Debug)]
struct FlakySource {
    inner: MemoryCursor,
    reject_hints: bool,
    fail_metadata: bool,
    fail_next_after: Option<u64>,
    fail_column: Option<usize>,
    nexts: u64,
}

impl FlakySource {
    fn new(inner: MemoryCursor) -> Self {
        Self {
            inner,
            reject_hints: false,
            fail_metadata: false,
            fail_next_after: None,
            fail_column: None,
            nexts: 0,
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if self.fail_column == Some(index) {
            return Err(Error::source_access(format!("read of column {} failed", index)));
        }
        Ok(())
    }
}

impl RowSource for FlakySource {
    fn columns(&self) -> Result<&[ColumnMetadata]> {
        if self.fail_metadata {
            return Err(Error::metadata("describe failed"));
        }
        self.inner.columns()
    }

    fn next(&mut self) -> Result<bool> {
        if self.fail_next_after == Some(self.nexts) {
            return Err(Error::source_access("connection reset"));
        }
        self.nexts += 1;
        self.inner.next()
    }

    fn get_string(&mut self, index: usize) -> Result<Option<String>> {
        self.check_column(index)?;
        self.inner.get_string(index)
    }

    fn get_boolean(&mut self, index: usize) -> Result<Option<bool>> {
        self.check_column(index)?;
        self.inner.get_boolean(index)
    }

    fn get_date(&mut self, index: usize) -> Result<Option<NaiveDateTime>> {
        self.check_column(index)?;
        self.inner.get_date(index)
    }

    fn get_timestamp(&mut self, index: usize) -> Result<Option<NaiveDateTime>> {
        self.check_column(index)?;
        self.inner.get_timestamp(index)
    }

    fn get_blob(&mut self, index: usize) -> Result<Option<Blob>> {
        self.check_column(index)?;
        self.inner.get_blob(index)
    }

    fn get_clob(&mut self, index: usize) -> Result<Option<Clob>> {
        self.check_column(index)?;
        self.inner.get_clob(index)
    }

    fn get_object(&mut self, index: usize) -> Result<Option<SqlValue>> {
        self.check_column(index)?;
        self.inner.get_object(index)
    }

    fn set_fetch_size(&mut self, rows: u32) -> Result<()> {
        if self.reject_hints {
            return Err(Error::source_access("fetch size not supported"));
        }
        self.inner.set_fetch_size(rows)
    }

    fn set_fetch_direction(&mut self, direction: FetchDirection) -> Result<()> {
        if self.reject_hints {
            return Err(Error::source_access("fetch direction not supported"));
        }
        self.inner.set_fetch_direction(direction)
    }

    fn close(&mut self) -> Result<()> {
        self.inner.close()
    }

    fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

fn two_rows() -> MemoryCursor {
    MemoryCursor::new(
        vec![
            ColumnMetadata::new("ID", type_code::INTEGER),
            ColumnMetadata::new("NAME", type_code::VARCHAR),
        ],
        vec![
            vec![SqlValue::Number("1".into()), SqlValue::String("a".into())],
            vec![SqlValue::Number("2".into()), SqlValue::String("b".into())],
        ],
    )
}

#[test]
fn test_rejected_hints_are_not_fatal() {
    let mut source = FlakySource::new(two_rows());
    source.reject_hints = true;

    let mut rows = RowMaterializer::open(source, ExportOptions::default()).unwrap();
    assert_eq!(rows.advance().unwrap().unwrap(), ["1", "a"]);
    assert_eq!(rows.source().inner.fetch_size(), 0);
}

#[test]
fn test_metadata_failure_propagates() {
    let mut source = FlakySource::new(two_rows());
    source.fail_metadata = true;

    let err = RowMaterializer::open(source, ExportOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Metadata { .. }));
    assert_eq!(err.kind(), ErrorKind::SourceAccess);
}

#[test]
fn test_advance_failure_propagates() {
    let mut source = FlakySource::new(two_rows());
    source.fail_next_after = Some(1);

    let mut rows = RowMaterializer::open(source, ExportOptions::default()).unwrap();
    assert!(rows.advance().unwrap().is_some());

    let err = rows.advance().unwrap_err();
    assert_eq!(err.to_string(), "Source access error: connection reset");
    assert!(rows.is_exhausted());
    // releasing the cursor after a failure is left to the caller
    assert!(!rows.source().is_closed());
    rows.close().unwrap();
    assert!(rows.source().is_closed());
}

#[test]
fn test_column_failure_ends_iteration() {
    let mut source = FlakySource::new(two_rows());
    source.fail_column = Some(2);

    let mut rows = RowMaterializer::open(source, ExportOptions::default()).unwrap();
    assert!(rows.advance().is_err());
    assert!(rows.is_exhausted());

    // the second row is never read
    assert!(matches!(rows.advance(), Err(Error::CursorClosed)));
    assert_eq!(rows.source().nexts, 1);
    assert_eq!(rows.rows_read(), 0);
}

#[test]
fn test_column_read_failure_propagates() {
    let mut source = FlakySource::new(two_rows());
    source.fail_column = Some(2);

    let mut rows = RowMaterializer::open(source, ExportOptions::default()).unwrap();
    let err = rows.advance().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SourceAccess);
    assert!(err.to_string().contains("column 2"));
}

#[test]
fn test_owned_rows_stop_after_error() {
    let mut source = FlakySource::new(two_rows());
    source.fail_next_after = Some(1);

    let rows = RowMaterializer::open(source, ExportOptions::default()).unwrap();
    let results: Vec<Result<Vec<String>>> = rows.into_rows().collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn test_bad_timestamp_pattern() {
    let cursor = MemoryCursor::new(
        vec![ColumnMetadata::new("AT", type_code::TIMESTAMP)],
        vec![vec![SqlValue::String("2023-01-05 10:00:00".into())]],
    );
    let options = ExportOptions::default().with_timestamp_format("yyyy-MM-dd 'T");

    // Construction succeeds; the pattern is only compiled on first use.
    let mut rows = RowMaterializer::open(cursor, options).unwrap();
    let err = rows.advance().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FormatConfiguration);
    assert!(matches!(err, Error::InvalidFormatPattern { .. }));
}
