//! Schema classification.
//!
//! Runs once per cursor, before the first row: applies the streaming hints
//! and turns the raw column metadata into a shared [`Schema`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cursor::{FetchDirection, RowSource};
use crate::error::Result;
use crate::types::{ColumnDescriptor, Schema};

/// Classifies the columns of one cursor.
#[derive(Debug, Clone)]
pub struct SchemaClassifier {
    schema: Arc<Schema>,
    elapsed: Duration,
}

impl SchemaClassifier {
    /// Apply the fetch hints to `source` and classify its columns.
    ///
    /// The hints are best-effort: a source that rejects them is still
    /// classified. Failing to read the metadata is an error.
    pub fn new<S: RowSource + ?Sized>(source: &mut S, fetch_size: u32) -> Result<Self> {
        let start = Instant::now();

        if let Err(e) = source.set_fetch_size(fetch_size) {
            log::warn!("fetch size hint {} not applied: {}", fetch_size, e);
        }
        if let Err(e) = source.set_fetch_direction(FetchDirection::Forward) {
            log::warn!("forward fetch hint not applied: {}", e);
        }

        let schema = Schema::from_metadata(source.columns()?);
        log::debug!("classified {} columns", schema.len());
        for column in schema.columns() {
            log::trace!(
                "column {} '{}': type code {} -> {}",
                column.index,
                column.name,
                column.type_code,
                column.category
            );
        }

        Ok(Self {
            schema: Arc::new(schema),
            elapsed: start.elapsed(),
        })
    }

    /// The classified schema.
    pub fn schema(&self) -> Arc<Schema> {
        Arc::clone(&self.schema)
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Column descriptors in index order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        self.schema.columns()
    }

    /// Time spent classifying.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
