//! Column types, values and large-object handles.

pub mod type_code;
mod category;
mod column;
mod lob;
mod metadata;
mod value;

pub use category::Category;
pub use column::{ColumnDescriptor, Schema};
pub use lob::{Blob, Clob};
pub use metadata::ColumnMetadata;
pub use value::SqlValue;
