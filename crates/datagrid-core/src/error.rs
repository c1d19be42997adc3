use crate::row::RowId;
use thiserror::Error;

/// Configuration errors surfaced at setup time.
///
/// The pipeline itself is total over its inputs: unknown column ids are
/// skipped and missing values resolve to [`crate::value::CellValue::Null`].
/// Only caller contract violations that can be detected cheaply up front are
/// reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("duplicate column id `{id}`")]
    DuplicateColumn { id: String },
    #[error("duplicate row id `{id}` at row {index}")]
    DuplicateRowId { id: RowId, index: usize },
}
