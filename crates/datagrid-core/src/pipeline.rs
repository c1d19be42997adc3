use crate::column::Column;

/// Sort direction for one key.
///
/// There is no `None` variant: a column that is not sorted is simply absent
/// from the key list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One sort key. An ordered list of keys encodes tie-break precedence: the
/// first key is primary, later keys break ties.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// One filter descriptor. Multiple filters are AND-combined: a row must
/// satisfy every one of them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Filter {
    pub column: String,
    pub query: String,
}

impl Filter {
    pub fn new(column: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            query: query.into(),
        }
    }
}

/// A pagination window over the processed row list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }
}

/// Who runs a pipeline stage.
///
/// `Server` means the caller already applied the stage (or will, via a data
/// request) and the engine must leave the rows untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProcessMode {
    #[default]
    Client,
    Server,
}

/// The fixed filter → sort → paginate composition, with each stage skipped
/// when its mode is [`ProcessMode::Server`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    pub filter: ProcessMode,
    pub sort: ProcessMode,
    pub paginate: ProcessMode,
}

impl Pipeline {
    /// Process `rows` and return the surviving row indices in display order.
    ///
    /// Indices refer to positions in `rows`, so callers can map back to the
    /// original records without the engine ever cloning them.
    pub fn run<T>(
        &self,
        rows: &[T],
        columns: &[Column<T>],
        filters: &[Filter],
        keys: &[SortKey],
        page: Option<Page>,
    ) -> Vec<usize> {
        let mut order = if self.filter == ProcessMode::Client && !filters.is_empty() {
            filter_rows(rows, columns, filters)
        } else {
            (0..rows.len()).collect()
        };
        if self.sort == ProcessMode::Client && !keys.is_empty() {
            sort_rows(rows, columns, keys, &mut order);
        }
        if self.paginate == ProcessMode::Client {
            if let Some(page) = page {
                paginate(&mut order, page);
            }
        }
        log::trace!(
            "pipeline: {} rows in, {} out ({} filters, {} sort keys)",
            rows.len(),
            order.len(),
            filters.len(),
            keys.len()
        );
        order
    }
}

/// Filter stage: indices of rows that satisfy every filter.
///
/// Filters naming an unknown or non-filterable column are skipped. The
/// default predicate is a case-insensitive substring match on the value's
/// string form; the query is lowercased once per pass.
pub fn filter_rows<T>(rows: &[T], columns: &[Column<T>], filters: &[Filter]) -> Vec<usize> {
    let active: Vec<(&Column<T>, &str, String)> = filters
        .iter()
        .filter_map(|f| {
            let col = columns.iter().find(|c| c.id() == f.column)?;
            if !col.is_filterable() {
                log::debug!("filter on non-filterable column `{}` skipped", f.column);
                return None;
            }
            Some((col, f.query.as_str(), f.query.to_lowercase()))
        })
        .collect();
    if active.len() < filters.len() {
        log::debug!("{} filter(s) skipped", filters.len() - active.len());
    }

    (0..rows.len())
        .filter(|&i| {
            active
                .iter()
                .all(|(col, query, lower)| col.row_matches(&rows[i], query, lower))
        })
        .collect()
}

/// Sort stage: stable multi-key sort of `order` in place.
///
/// Keys naming an unknown or non-sortable column are skipped. `slice::sort_by`
/// is a stable sort, so rows that compare equal on every key keep their
/// incoming relative order. A descending key reverses the whole comparison,
/// which also pushes nulls last (they come first ascending).
pub fn sort_rows<T>(rows: &[T], columns: &[Column<T>], keys: &[SortKey], order: &mut [usize]) {
    let resolved: Vec<(&Column<T>, SortDirection)> = keys
        .iter()
        .filter_map(|key| {
            let col = columns.iter().find(|c| c.id() == key.column)?;
            if !col.is_sortable() {
                log::debug!("sort on non-sortable column `{}` skipped", key.column);
                return None;
            }
            Some((col, key.direction))
        })
        .collect();
    if resolved.is_empty() {
        return;
    }

    order.sort_by(|&a, &b| {
        for (col, direction) in &resolved {
            let ord = col.compare_rows(&rows[a], &rows[b]);
            let ord = match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            if !ord.is_eq() {
                return ord;
            }
        }
        std::cmp::Ordering::Equal
    });
}

/// Paginate stage: keep the slice `[index * size, index * size + size)`.
/// Out-of-range pages (and a zero page size) yield an empty list.
pub fn paginate(order: &mut Vec<usize>, page: Page) {
    let start = page.index.saturating_mul(page.size);
    if page.size == 0 || start >= order.len() {
        order.clear();
        return;
    }
    order.drain(..start);
    order.truncate(page.size);
}
