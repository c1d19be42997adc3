use crate::error::GridError;
use crate::value::CellValue;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Rendering/semantics hint for a column.
///
/// The kind does not change how values are compared (that is driven by the
/// resolved [`CellValue`] shapes); it is carried for the view layer and for
/// callers that want type-directed defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Date,
    Boolean,
    Currency,
    /// Action buttons etc. Not sortable or filterable by default.
    Actions,
}

pub type ValueFn<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;
pub type PredicateFn<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;

/// Describes one field of the row type `T`.
///
/// The accessor resolves a row to the cell value shown (and compared /
/// filtered) in this column. Custom comparators and filter predicates
/// override the value-based defaults.
pub struct Column<T> {
    id: String,
    kind: ColumnKind,
    sortable: bool,
    filterable: bool,
    accessor: ValueFn<T>,
    comparator: Option<CompareFn<T>>,
    predicate: Option<PredicateFn<T>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind,
            sortable: self.sortable,
            filterable: self.filterable,
            accessor: self.accessor.clone(),
            comparator: self.comparator.clone(),
            predicate: self.predicate.clone(),
        }
    }
}

impl<T> Column<T> {
    pub fn new(
        id: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ColumnKind::Text,
            sortable: true,
            filterable: true,
            accessor: Arc::new(accessor),
            comparator: None,
            predicate: None,
        }
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        if kind == ColumnKind::Actions {
            self.sortable = false;
            self.filterable = false;
        }
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Replace the value-based default comparison for this column.
    pub fn compare_with(mut self, f: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        self.comparator = Some(Arc::new(f));
        self
    }

    /// Replace the default case-insensitive substring filter for this column.
    /// The predicate receives the row and the raw (uncased) filter query.
    pub fn filter_with(mut self, f: impl Fn(&T, &str) -> bool + Send + Sync + 'static) -> Self {
        self.predicate = Some(Arc::new(f));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn column_kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    /// Resolve this column's value for `row`.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Ascending comparison of two rows in this column.
    pub fn compare_rows(&self, a: &T, b: &T) -> Ordering {
        match &self.comparator {
            Some(cmp) => cmp(a, b),
            None => self.value(a).compare(&self.value(b)),
        }
    }

    /// Whether `row` passes a filter on this column.
    ///
    /// `query` is the raw filter value; `query_lower` its lowercased form,
    /// computed once per filter pass by the pipeline.
    pub fn row_matches(&self, row: &T, query: &str, query_lower: &str) -> bool {
        match &self.predicate {
            Some(pred) => pred(row, query),
            None => self.value(row).matches_lower(query_lower),
        }
    }
}

/// Validate a column set: ids must be unique.
pub fn check_columns<T>(columns: &[Column<T>]) -> Result<(), GridError> {
    let mut seen = BTreeSet::new();
    for col in columns {
        if !seen.insert(col.id()) {
            return Err(GridError::DuplicateColumn {
                id: col.id().to_string(),
            });
        }
    }
    Ok(())
}
