use crate::error::GridError;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Stable identifier for a data row.
///
/// Selection and expansion are keyed by `RowId` so they survive sorting,
/// filtering and pagination. Ids must be unique across the row set; producing
/// colliding ids is a caller contract violation with unspecified precedence
/// (use [`check_row_ids`] in tests or debug paths to surface collisions).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowId {
    /// Positional fallback used when no id function is configured.
    Index(usize),
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Index(i) => write!(f, "#{i}"),
            RowId::Int(n) => write!(f, "{n}"),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<usize> for RowId {
    fn from(v: usize) -> Self {
        RowId::Index(v)
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        RowId::Int(v)
    }
}

impl From<&str> for RowId {
    fn from(v: &str) -> Self {
        RowId::Text(v.to_string())
    }
}

impl From<String> for RowId {
    fn from(v: String) -> Self {
        RowId::Text(v)
    }
}

/// Resolves a row to its stable id. Receives the row and its original
/// (pre-pipeline) index.
pub type RowIdFn<T> = Arc<dyn Fn(&T, usize) -> RowId + Send + Sync>;

/// The default id function: the row's original index.
pub fn index_row_id<T>() -> RowIdFn<T> {
    Arc::new(|_, index| RowId::Index(index))
}

/// Opt-in uniqueness check over a row set.
///
/// The engine never runs this on the hot path; collisions are a caller
/// contract violation, not a recoverable runtime condition.
pub fn check_row_ids<T>(rows: &[T], row_id: &RowIdFn<T>) -> Result<(), GridError> {
    let mut seen = BTreeSet::new();
    for (index, row) in rows.iter().enumerate() {
        let id = row_id(row, index);
        if !seen.insert(id.clone()) {
            return Err(GridError::DuplicateRowId { id, index });
        }
    }
    Ok(())
}
