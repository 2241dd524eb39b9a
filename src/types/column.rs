//! Classified column descriptors and the schema that holds them.

use std::collections::HashMap;
use std::sync::Arc;

use super::category::Category;
use super::metadata::ColumnMetadata;

/// A classified column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// 1-based column index.
    pub index: usize,
    /// Column name, interned per schema.
    pub name: Arc<str>,
    /// Semantic category.
    pub category: Category,
    /// Raw native type code, kept for diagnostics.
    pub type_code: i32,
}

/// Per-cursor column descriptors, shared read-only between the classifier
/// and the materializer.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: Vec<ColumnDescriptor>,
}

impl Schema {
    /// Build a schema from raw metadata, classifying every column.
    ///
    /// Equal column names share one allocation.
    pub fn from_metadata(metadata: &[ColumnMetadata]) -> Self {
        let mut names: HashMap<&str, Arc<str>> = HashMap::new();
        let columns = metadata
            .iter()
            .enumerate()
            .map(|(i, meta)| {
                let name = names
                    .entry(meta.name.as_str())
                    .or_insert_with(|| Arc::from(meta.name.as_str()))
                    .clone();
                ColumnDescriptor {
                    index: i + 1,
                    name,
                    category: Category::from_type_code(meta.type_code),
                    type_code: meta.type_code,
                }
            })
            .collect();
        Self { columns }
    }

    /// Column descriptors in index order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by 1-based index.
    pub fn get(&self, index: usize) -> Option<&ColumnDescriptor> {
        index.checked_sub(1).and_then(|i| self.columns.get(i))
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_ref()).collect()
    }

    /// Get column categories.
    pub fn categories(&self) -> Vec<Category> {
        self.columns.iter().map(|c| c.category).collect()
    }

    /// Get raw type codes.
    pub fn type_codes(&self) -> Vec<i32> {
        self.columns.iter().map(|c| c.type_code).collect()
    }

    /// Find the 1-based column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.index)
    }
}
