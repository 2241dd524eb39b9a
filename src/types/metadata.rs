//! Raw column metadata as reported by a row source.
//!
//! This preserves what the source says about a column.
//! For classified columns, use `ColumnDescriptor`.

use super::type_code;

/// Raw column metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMetadata {
    /// Column name.
    pub name: String,
    /// Native type code.
    pub type_code: i32,
    /// Source type name (e.g. `VARCHAR2`, `NUMBER`).
    pub type_name: String,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

impl ColumnMetadata {
    /// Create new column metadata with minimal info.
    pub fn new(name: impl Into<String>, type_code: i32) -> Self {
        Self {
            name: name.into(),
            type_code,
            type_name: type_code::type_name(type_code).to_string(),
            nullable: true,
        }
    }

    /// Override the source type name.
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Set nullability.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}
