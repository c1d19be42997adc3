use datagrid_core::pipeline::Filter;
use datagrid_core::pipeline::Page;
use datagrid_core::pipeline::SortKey;
use datagrid_core::row::RowId;

/// Interaction events fed into the grid by the host view layer.
///
/// Scroll events are O(1): they only record the new position. Clamping and
/// window recomputation happen when the read model is next assembled, so a
/// burst of scroll ticks never schedules unbounded work.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent {
    /// A sort-header click. `additive` marks a modifier click (shift, by
    /// convention) for [`SortPolicy::MultiColumn`](crate::config::SortPolicy).
    SortClick { column: String, additive: bool },
    /// A row checkbox/click setting one row's selected state.
    SelectRow { id: RowId, selected: bool },
    /// The header select-all checkbox. Applies to the processed
    /// (filtered + sorted, unpaginated) row set.
    SelectAll { selected: bool },
    ToggleExpand { id: RowId },
    /// Replace the filter list (a filter bar commit).
    SetFilters { filters: Vec<Filter> },
    SetPage { index: usize },
    Scroll { scroll_top: u64 },
    ScrollBy { delta: i64 },
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
}

/// State-transition notifications emitted back to the caller.
///
/// The grid emits signals and lets the app decide; there are no stored
/// callbacks. Each signal carries the new value, so a caller that owns the
/// domain can store it and write it back through the matching setter.
#[derive(Clone, Debug, PartialEq)]
pub enum GridSignal {
    SortChanged(Vec<SortKey>),
    FiltersChanged(Vec<Filter>),
    SelectionChanged(Vec<RowId>),
    ExpansionChanged(Vec<RowId>),
    PageChanged(usize),
    /// A server-mode stage needs fresh rows. The caller fetches and supplies
    /// new `rows` on a later cycle; the engine itself never performs I/O.
    DataRequested(DataRequest),
}

/// Payload of [`GridSignal::DataRequested`].
///
/// `seq` increases monotonically per grid instance. Responses can arrive out
/// of order; a caller that tags its fetches with `seq` can drop any response
/// older than the last one it applied. The engine stays consistent either
/// way: it always reflects the rows most recently supplied.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataRequest {
    pub seq: u64,
    pub page: Option<Page>,
    pub sort: Vec<SortKey>,
    pub filters: Vec<Filter>,
}
