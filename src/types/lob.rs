//! Large-object handles for BLOB and CLOB columns.
//!
//! A handle is handed out by the row source and is read through 1-based
//! sub-range accessors. Once [`free`](Blob::free) has been called the content
//! is dropped and any further read fails with [`Error::LobFreed`].

use bytes::Bytes;

use crate::error::{Error, Result};

/// Resolve a 1-based `(pos, len)` window against a content length.
fn window(pos: u64, len: usize, total: usize) -> Result<(usize, usize)> {
    if pos == 0 {
        return Err(Error::source_access("LOB position is 1-based"));
    }
    let start = (pos - 1) as usize;
    if start > total {
        return Err(Error::source_access(format!(
            "LOB position {} beyond length {}",
            pos, total
        )));
    }
    Ok((start, start + len.min(total - start)))
}

/// Binary large-object handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    data: Option<Bytes>,
}

impl Blob {
    /// Create a handle over the given content.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    fn content(&self) -> Result<&Bytes> {
        self.data.as_ref().ok_or(Error::LobFreed)
    }

    /// Length in bytes.
    pub fn len(&self) -> Result<u64> {
        Ok(self.content()?.len() as u64)
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.content()?.is_empty())
    }

    /// Read `len` bytes starting at 1-based position `pos`.
    pub fn get_bytes(&self, pos: u64, len: usize) -> Result<Bytes> {
        let data = self.content()?;
        let (start, end) = window(pos, len, data.len())?;
        Ok(data.slice(start..end))
    }

    /// Release the handle.
    pub fn free(&mut self) {
        self.data = None;
    }

    /// Whether [`free`](Self::free) has been called.
    pub fn is_freed(&self) -> bool {
        self.data.is_none()
    }
}

/// Character large-object handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Clob {
    data: Option<String>,
}

impl Clob {
    /// Create a handle over the given content.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    fn content(&self) -> Result<&str> {
        self.data.as_deref().ok_or(Error::LobFreed)
    }

    /// Length in characters.
    pub fn len(&self) -> Result<u64> {
        Ok(self.content()?.chars().count() as u64)
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.content()?.is_empty())
    }

    /// Read `len` characters starting at 1-based position `pos`.
    pub fn get_sub_string(&self, pos: u64, len: usize) -> Result<String> {
        let data = self.content()?;
        let total = data.chars().count();
        let (start, end) = window(pos, len, total)?;
        Ok(data.chars().skip(start).take(end - start).collect())
    }

    /// Release the handle.
    pub fn free(&mut self) {
        self.data = None;
    }

    /// Whether [`free`](Self::free) has been called.
    pub fn is_freed(&self) -> bool {
        self.data.is_none()
    }
}
