use datagrid_core::pipeline::Filter;
use datagrid_core::pipeline::ProcessMode;
use datagrid_core::pipeline::SortKey;
use datagrid_core::selection::SelectionMode;
use datagrid_core::window::DEFAULT_VIRTUALIZE_THRESHOLD;

/// Who owns a piece of interaction state.
///
/// Every domain (sort, filters, selection, expansion, page) is stored once,
/// inside the grid. With `Engine` ownership the grid mutates it on
/// interaction and emits the new value as a signal. With `Caller` ownership
/// the grid only emits the signal; the caller decides, then writes the value
/// back through the matching setter. Single storage, so the two views of the
/// state can never silently diverge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StateOwner {
    #[default]
    Engine,
    Caller,
}

/// How header clicks build the sort key list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortPolicy {
    /// A click clears other columns and cycles the clicked one through
    /// none → ascending → descending → none.
    #[default]
    SingleColumn,
    /// Like `SingleColumn`, unless the event is additive (shift-click in a
    /// typical host): then the clicked column is appended to / cycled within
    /// the existing key list.
    MultiColumn,
}

#[derive(Clone, Debug, Default)]
pub struct SortingOptions {
    /// `Server` skips the client sort stage and turns header clicks into
    /// [`DataRequested`](crate::events::GridSignal::DataRequested) signals.
    /// Server mode implies caller ownership: the grid reflects whatever sort
    /// the caller last wrote back.
    pub mode: ProcessMode,
    pub owner: StateOwner,
    pub policy: SortPolicy,
    pub initial: Vec<SortKey>,
}

#[derive(Clone, Debug, Default)]
pub struct FilteringOptions {
    pub mode: ProcessMode,
    pub owner: StateOwner,
    pub initial: Vec<Filter>,
}

#[derive(Clone, Debug)]
pub struct PaginationOptions {
    pub enabled: bool,
    pub mode: ProcessMode,
    pub owner: StateOwner,
    pub page_size: usize,
    pub initial_index: usize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            mode: ProcessMode::Client,
            owner: StateOwner::Engine,
            page_size: 50,
            initial_index: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SelectionOptions {
    pub mode: SelectionMode,
    pub owner: StateOwner,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExpansionOptions {
    pub owner: StateOwner,
}

/// Options for [`DataGrid`](crate::grid::DataGrid).
///
/// Geometry units (row/container height) are whatever the host view layer
/// measures in: pixels in a browser-like host, terminal rows in a TUI.
#[derive(Clone, Debug)]
pub struct GridOptions {
    pub row_height: u32,
    pub container_height: u32,
    pub overscan: usize,
    /// Master switch for row windowing.
    pub virtualize: bool,
    /// Windowing only engages at or above this many processed rows; smaller
    /// lists are handed to the view in full.
    pub virtualize_threshold: usize,
    pub sorting: SortingOptions,
    pub filtering: FilteringOptions,
    pub pagination: PaginationOptions,
    pub selection: SelectionOptions,
    pub expansion: ExpansionOptions,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            row_height: 1,
            container_height: 0,
            overscan: 2,
            virtualize: true,
            virtualize_threshold: DEFAULT_VIRTUALIZE_THRESHOLD,
            sorting: SortingOptions::default(),
            filtering: FilteringOptions::default(),
            pagination: PaginationOptions::default(),
            selection: SelectionOptions::default(),
            expansion: ExpansionOptions::default(),
        }
    }
}
