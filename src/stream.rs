//! Extension trait for consuming a materializer as a `Stream`.
//!
//! # Example
//!
//! ```
//! use futures::stream::TryStreamExt;
//! use rowset_text::{ColumnMetadata, ExportOptions, MemoryCursor, RowMaterializer, RowStreamExt, SqlValue};
//! use rowset_text::types::type_code;
//!
//! let cursor = MemoryCursor::new(
//!     vec![ColumnMetadata::new("ID", type_code::INTEGER)],
//!     vec![vec![SqlValue::Number("1".into())]],
//! );
//! let rows = RowMaterializer::open(cursor, ExportOptions::default())?;
//!
//! let collected: Vec<Vec<String>> =
//!     futures::executor::block_on(rows.into_stream().try_collect())?;
//! assert_eq!(collected, vec![vec!["1".to_string()]]);
//! # Ok::<(), rowset_text::Error>(())
//! ```

use futures::Stream;

use crate::cursor::RowSource;
use crate::error::Result;
use crate::materializer::RowMaterializer;

/// Converts a materializer into a stream of owned rows.
pub trait RowStreamExt: Sized {
    /// Convert into a Stream yielding `Result<Vec<String>>`.
    ///
    /// The stream takes ownership of the materializer. Each poll reads one
    /// row synchronously; the stream ends after the last row or the first
    /// error.
    fn into_stream(self) -> impl Stream<Item = Result<Vec<String>>>;
}

impl<S: RowSource> RowStreamExt for RowMaterializer<S> {
    fn into_stream(self) -> impl Stream<Item = Result<Vec<String>>> {
        futures::stream::iter(self.into_rows())
    }
}
