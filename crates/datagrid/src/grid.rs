use crate::config::GridOptions;
use crate::config::SortPolicy;
use crate::config::StateOwner;
use crate::events::DataRequest;
use crate::events::GridEvent;
use crate::events::GridSignal;
use datagrid_core::column::Column;
use datagrid_core::column::check_columns;
use datagrid_core::error::GridError;
use datagrid_core::expansion::Expansion;
use datagrid_core::pipeline::Filter;
use datagrid_core::pipeline::Page;
use datagrid_core::pipeline::ProcessMode;
use datagrid_core::pipeline::SortDirection;
use datagrid_core::pipeline::SortKey;
use datagrid_core::pipeline::filter_rows;
use datagrid_core::pipeline::paginate;
use datagrid_core::pipeline::sort_rows;
use datagrid_core::row::RowId;
use datagrid_core::row::RowIdFn;
use datagrid_core::row::check_row_ids;
use datagrid_core::row::index_row_id;
use datagrid_core::selection::SelectAllState;
use datagrid_core::selection::Selection;
use datagrid_core::selection::SelectionMode;
use datagrid_core::selection::select_all_state;
use datagrid_core::window::Window;
use datagrid_core::window::WindowState;

/// Terminal display state for one render cycle. Checked in order:
/// loading, then error, then empty, then ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error,
    Empty,
    Ready,
}

/// One row of the rendered window.
#[derive(Clone, Debug)]
pub struct RowView<'a, T> {
    /// Index of the row in the caller's original `rows` slice.
    pub index: usize,
    pub id: RowId,
    pub row: &'a T,
    pub selected: bool,
    pub expanded: bool,
}

/// The read model assembled once per render cycle.
///
/// `rows` is the windowed slice; `offset_top`/`total_height` let the view
/// translate it into place with spacers above and below.
#[derive(Clone, Debug)]
pub struct GridViewModel<'a, T> {
    pub state: DisplayState,
    /// The caller-reported error, surfaced verbatim when `state` is
    /// [`DisplayState::Error`].
    pub error: Option<String>,
    pub rows: Vec<RowView<'a, T>>,
    /// Processed-list index of `rows[0]`.
    pub start_index: usize,
    pub offset_top: u64,
    pub total_height: u64,
    /// Filtered and sorted row count, before pagination.
    pub processed_count: usize,
    pub page_index: usize,
    /// Page count when client-side pagination is active.
    pub page_count: Option<usize>,
    pub sort: Vec<SortKey>,
    pub selected_count: usize,
    pub select_all: SelectAllState,
}

/// A headless data grid.
///
/// The grid owns interaction state (sort keys, filters, selection, expansion,
/// page, scroll position) and, each cycle, turns the caller's rows into a
/// windowed [`GridViewModel`]. Rows are borrowed fresh per call and never
/// stored, so the engine has no opinion about where they come from.
///
/// You drive it from your UI loop: feed [`GridEvent`]s to
/// [`handle_event`](DataGrid::handle_event), apply any signals your side owns,
/// then call [`view`](DataGrid::view) and render the result.
pub struct DataGrid<T> {
    columns: Vec<Column<T>>,
    options: GridOptions,
    row_id: RowIdFn<T>,
    sort: Vec<SortKey>,
    filters: Vec<Filter>,
    selection: Selection,
    expansion: Expansion,
    page_index: usize,
    window: WindowState,
    loading: bool,
    error: Option<String>,
    request_seq: u64,
}

impl<T> DataGrid<T> {
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, GridError> {
        Self::with_options(columns, GridOptions::default())
    }

    pub fn with_options(columns: Vec<Column<T>>, options: GridOptions) -> Result<Self, GridError> {
        check_columns(&columns)?;
        let window = WindowState::new(
            options.row_height,
            options.container_height,
            options.overscan,
        );
        Ok(Self {
            columns,
            sort: options.sorting.initial.clone(),
            filters: options.filtering.initial.clone(),
            selection: Selection::new(options.selection.mode),
            expansion: Expansion::new(),
            page_index: options.pagination.initial_index,
            window,
            loading: false,
            error: None,
            request_seq: 0,
            row_id: index_row_id(),
            options,
        })
    }

    /// Configure how rows resolve to stable ids. Defaults to the row's
    /// original index. Ids must be unique per row set (see
    /// [`check_row_ids`](DataGrid::check_row_ids)).
    pub fn with_row_id(mut self, f: impl Fn(&T, usize) -> RowId + Send + Sync + 'static) -> Self {
        self.row_id = std::sync::Arc::new(f);
        self
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: GridOptions) {
        if options.selection.mode != self.options.selection.mode {
            self.selection = Selection::new(options.selection.mode);
        }
        self.options = options;
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<Column<T>>) -> Result<(), GridError> {
        check_columns(&columns)?;
        self.columns = columns;
        Ok(())
    }

    /// Update the viewport height reported by the host.
    pub fn set_viewport(&mut self, container_height: u32) {
        self.options.container_height = container_height;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn sort(&self) -> &[SortKey] {
        &self.sort
    }

    /// Write back the sort key list (caller-owned sorting, or a server-mode
    /// response landing).
    pub fn set_sort(&mut self, sort: Vec<SortKey>) {
        self.sort = sort;
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: Vec<Filter>) {
        self.filters = filters;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn set_selected(&mut self, ids: impl IntoIterator<Item = RowId>) {
        self.selection.replace(ids);
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn set_expanded(&mut self, ids: impl IntoIterator<Item = RowId>) {
        self.expansion.replace(ids);
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }

    pub fn scroll_top(&self) -> u64 {
        self.window.scroll_top
    }

    /// Opt-in check that the configured id function is injective over `rows`.
    pub fn check_row_ids(&self, rows: &[T]) -> Result<(), GridError> {
        check_row_ids(rows, &self.row_id)
    }

    /// Apply one interaction event and return the signals it produced.
    ///
    /// Engine-owned, client-mode domains are mutated in place; everything
    /// else only emits, and the caller writes back through the setters.
    /// Scroll events are O(1): they record the position and defer clamping
    /// and window math to [`view`](DataGrid::view).
    pub fn handle_event(&mut self, rows: &[T], event: GridEvent) -> Vec<GridSignal> {
        match event {
            GridEvent::SortClick { column, additive } => self.on_sort_click(&column, additive),
            GridEvent::SelectRow { id, selected } => {
                let mut next = self.selection.clone();
                if !next.select(id, selected) {
                    return Vec::new();
                }
                self.commit_selection(next)
            }
            GridEvent::SelectAll { selected } => {
                if self.selection.mode() != SelectionMode::Multi {
                    return Vec::new();
                }
                let order = self.processed(rows);
                let ids: Vec<RowId> = order
                    .iter()
                    .map(|&i| (self.row_id)(&rows[i], i))
                    .collect();
                let mut next = self.selection.clone();
                if !next.select_all(ids, selected) {
                    return Vec::new();
                }
                self.commit_selection(next)
            }
            GridEvent::ToggleExpand { id } => {
                let mut next = self.expansion.clone();
                let expanded = next.toggle(id.clone());
                log::debug!("row {id} {}", if expanded { "expanded" } else { "collapsed" });
                let ids: Vec<RowId> = next.ids().cloned().collect();
                if self.options.expansion.owner == StateOwner::Engine {
                    self.expansion = next;
                }
                vec![GridSignal::ExpansionChanged(ids)]
            }
            GridEvent::SetFilters { filters } => self.on_set_filters(filters),
            GridEvent::SetPage { index } => self.on_set_page(index),
            GridEvent::Scroll { scroll_top } => {
                self.window.scroll_top = scroll_top;
                Vec::new()
            }
            GridEvent::ScrollBy { delta } => {
                self.window.scroll_top = self.window.scroll_top.saturating_add_signed(delta);
                Vec::new()
            }
            GridEvent::PageUp => {
                let step = self.options.container_height as i64;
                self.window.scroll_top = self.window.scroll_top.saturating_add_signed(-step);
                Vec::new()
            }
            GridEvent::PageDown => {
                let step = self.options.container_height as i64;
                self.window.scroll_top = self.window.scroll_top.saturating_add(step as u64);
                Vec::new()
            }
            GridEvent::ScrollToTop => {
                self.window.scroll_top = 0;
                Vec::new()
            }
            GridEvent::ScrollToBottom => {
                // Clamped against the processed row count on the next view.
                self.window.scroll_top = u64::MAX;
                Vec::new()
            }
        }
    }

    /// Assemble the read model for the current cycle.
    ///
    /// Runs the pipeline over `rows`, then windows the result when
    /// virtualization is on and the processed count reaches the threshold;
    /// below it the full processed list is returned.
    pub fn view<'a>(&mut self, rows: &'a [T]) -> GridViewModel<'a, T> {
        self.window.row_height = self.options.row_height;
        self.window.container_height = self.options.container_height;
        self.window.overscan = self.options.overscan;

        if self.loading {
            return self.terminal_model(DisplayState::Loading, None);
        }
        if let Some(err) = self.error.clone() {
            return self.terminal_model(DisplayState::Error, Some(err));
        }

        let full = self.processed(rows);
        let processed_count = full.len();
        let selected_count = full
            .iter()
            .filter(|&&i| self.selection.is_selected(&(self.row_id)(&rows[i], i)))
            .count();

        let mut order = full;
        let page = self.current_page();
        if self.options.pagination.mode == ProcessMode::Client {
            if let Some(page) = page {
                paginate(&mut order, page);
            }
        }

        let count = order.len();
        self.window.clamp(count);
        let win = if self.options.virtualize && count >= self.options.virtualize_threshold {
            self.window.window(count)
        } else {
            Window {
                start: 0,
                end: count,
                offset_top: 0,
                total_height: self.window.total_height(count),
            }
        };

        let rows_out: Vec<RowView<'a, T>> = order[win.start..win.end]
            .iter()
            .map(|&i| {
                let id = (self.row_id)(&rows[i], i);
                RowView {
                    index: i,
                    selected: self.selection.is_selected(&id),
                    expanded: self.expansion.is_expanded(&id),
                    id,
                    row: &rows[i],
                }
            })
            .collect();

        let page_count = match (self.options.pagination.mode, page) {
            (ProcessMode::Client, Some(p)) => Some(processed_count.div_ceil(p.size.max(1))),
            _ => None,
        };

        GridViewModel {
            state: if count == 0 {
                DisplayState::Empty
            } else {
                DisplayState::Ready
            },
            error: None,
            rows: rows_out,
            start_index: win.start,
            offset_top: win.offset_top,
            total_height: win.total_height,
            processed_count,
            page_index: self.page_index,
            page_count,
            sort: self.sort.clone(),
            selected_count,
            select_all: select_all_state(selected_count, processed_count),
        }
    }

    fn terminal_model<'a>(&self, state: DisplayState, error: Option<String>) -> GridViewModel<'a, T> {
        GridViewModel {
            state,
            error,
            rows: Vec::new(),
            start_index: 0,
            offset_top: 0,
            total_height: 0,
            processed_count: 0,
            page_index: self.page_index,
            page_count: None,
            sort: self.sort.clone(),
            selected_count: self.selection.len(),
            select_all: SelectAllState::Unchecked,
        }
    }

    /// Filter + sort (never paginate) under the configured modes.
    fn processed(&self, rows: &[T]) -> Vec<usize> {
        let mut order =
            if self.options.filtering.mode == ProcessMode::Client && !self.filters.is_empty() {
                filter_rows(rows, &self.columns, &self.filters)
            } else {
                (0..rows.len()).collect()
            };
        if self.options.sorting.mode == ProcessMode::Client && !self.sort.is_empty() {
            sort_rows(rows, &self.columns, &self.sort, &mut order);
        }
        order
    }

    fn on_sort_click(&mut self, column: &str, additive: bool) -> Vec<GridSignal> {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id() == column && c.is_sortable());
        if !sortable {
            log::debug!("sort click on unknown or non-sortable column `{column}` ignored");
            return Vec::new();
        }

        let next = self.next_sort(column, additive);
        log::debug!("sort cycle on `{column}`: {} key(s)", next.len());
        let mut signals = vec![GridSignal::SortChanged(next.clone())];
        if self.options.sorting.mode == ProcessMode::Server {
            let request = self.next_request(self.current_page(), next, self.filters.clone());
            signals.push(GridSignal::DataRequested(request));
        } else if self.options.sorting.owner == StateOwner::Engine {
            self.sort = next;
        }
        signals
    }

    /// Cycle `column` through none → asc → desc → none. Non-additive clicks
    /// clear every other column; additive clicks (under
    /// [`SortPolicy::MultiColumn`]) edit the clicked column within the list.
    fn next_sort(&self, column: &str, additive: bool) -> Vec<SortKey> {
        let additive = additive && self.options.sorting.policy == SortPolicy::MultiColumn;
        let current = self
            .sort
            .iter()
            .find(|k| k.column == column)
            .map(|k| k.direction);

        let mut next = if additive {
            self.sort.clone()
        } else {
            Vec::new()
        };
        match current {
            None => next.push(SortKey::asc(column)),
            Some(SortDirection::Ascending) => {
                if additive {
                    if let Some(k) = next.iter_mut().find(|k| k.column == column) {
                        k.direction = SortDirection::Descending;
                    }
                } else {
                    next.push(SortKey::desc(column));
                }
            }
            Some(SortDirection::Descending) => next.retain(|k| k.column != column),
        }
        next
    }

    fn on_set_filters(&mut self, filters: Vec<Filter>) -> Vec<GridSignal> {
        if filters == self.filters {
            return Vec::new();
        }
        let mut signals = vec![GridSignal::FiltersChanged(filters.clone())];
        if self.options.filtering.mode == ProcessMode::Server {
            let request = self.next_request(self.current_page(), self.sort.clone(), filters);
            signals.push(GridSignal::DataRequested(request));
        } else if self.options.filtering.owner == StateOwner::Engine {
            self.filters = filters;
        }
        signals
    }

    fn on_set_page(&mut self, index: usize) -> Vec<GridSignal> {
        if !self.options.pagination.enabled || index == self.page_index {
            return Vec::new();
        }
        let mut signals = vec![GridSignal::PageChanged(index)];
        if self.options.pagination.mode == ProcessMode::Server {
            let page = Page::new(index, self.options.pagination.page_size);
            let request = self.next_request(Some(page), self.sort.clone(), self.filters.clone());
            signals.push(GridSignal::DataRequested(request));
        } else if self.options.pagination.owner == StateOwner::Engine {
            self.page_index = index;
        }
        signals
    }

    fn commit_selection(&mut self, next: Selection) -> Vec<GridSignal> {
        let ids: Vec<RowId> = next.ids().cloned().collect();
        log::debug!("selection changed: {} row(s)", ids.len());
        if self.options.selection.owner == StateOwner::Engine {
            self.selection = next;
        }
        vec![GridSignal::SelectionChanged(ids)]
    }

    fn current_page(&self) -> Option<Page> {
        self.options
            .pagination
            .enabled
            .then(|| Page::new(self.page_index, self.options.pagination.page_size))
    }

    fn next_request(
        &mut self,
        page: Option<Page>,
        sort: Vec<SortKey>,
        filters: Vec<Filter>,
    ) -> DataRequest {
        self.request_seq += 1;
        log::debug!("data request #{}", self.request_seq);
        DataRequest {
            seq: self.request_seq,
            page,
            sort,
            filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilteringOptions;
    use crate::config::PaginationOptions;
    use crate::config::SelectionOptions;
    use crate::config::SortingOptions;
    use datagrid_core::value::CellValue;

    #[derive(Clone)]
    struct Person {
        id: i64,
        name: &'static str,
        status: &'static str,
    }

    fn person(id: i64, name: &'static str, status: &'static str) -> Person {
        Person { id, name, status }
    }

    fn columns() -> Vec<Column<Person>> {
        vec![
            Column::new("name", |p: &Person| p.name.into()),
            Column::new("status", |p: &Person| p.status.into()),
        ]
    }

    fn people() -> Vec<Person> {
        vec![
            person(1, "eve", "active"),
            person(2, "bob", "idle"),
            person(3, "alice", "active"),
            person(4, "dan", "idle"),
            person(5, "carol", "active"),
        ]
    }

    fn grid_with(options: GridOptions) -> DataGrid<Person> {
        DataGrid::with_options(columns(), options)
            .unwrap()
            .with_row_id(|p, _| RowId::Int(p.id))
    }

    fn multi_select_grid() -> DataGrid<Person> {
        grid_with(GridOptions {
            selection: SelectionOptions {
                mode: SelectionMode::Multi,
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[test]
    fn sort_header_cycles_asc_desc_none() {
        let rows = people();
        let mut grid = grid_with(GridOptions::default());
        let click = || GridEvent::SortClick {
            column: "name".into(),
            additive: false,
        };

        grid.handle_event(&rows, click());
        assert_eq!(grid.sort(), &[SortKey::asc("name")]);
        grid.handle_event(&rows, click());
        assert_eq!(grid.sort(), &[SortKey::desc("name")]);
        grid.handle_event(&rows, click());
        assert_eq!(grid.sort(), &[] as &[SortKey]);

        // Back to unsorted: original row order restored.
        let model = grid.view(&rows);
        let names: Vec<&str> = model.rows.iter().map(|r| r.row.name).collect();
        assert_eq!(names, vec!["eve", "bob", "alice", "dan", "carol"]);
    }

    #[test]
    fn clicking_another_column_clears_the_first() {
        let rows = people();
        let mut grid = grid_with(GridOptions::default());
        grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "name".into(),
                additive: false,
            },
        );
        grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "status".into(),
                additive: false,
            },
        );
        assert_eq!(grid.sort(), &[SortKey::asc("status")]);
    }

    #[test]
    fn additive_clicks_accumulate_under_multi_column_policy() {
        let rows = people();
        let mut grid = grid_with(GridOptions {
            sorting: SortingOptions {
                policy: SortPolicy::MultiColumn,
                ..Default::default()
            },
            ..Default::default()
        });
        grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "status".into(),
                additive: false,
            },
        );
        grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "name".into(),
                additive: true,
            },
        );
        assert_eq!(grid.sort(), &[SortKey::asc("status"), SortKey::asc("name")]);

        grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "name".into(),
                additive: true,
            },
        );
        assert_eq!(
            grid.sort(),
            &[SortKey::asc("status"), SortKey::desc("name")]
        );
    }

    #[test]
    fn unknown_sort_column_is_ignored() {
        let rows = people();
        let mut grid = grid_with(GridOptions::default());
        let signals = grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "ghost".into(),
                additive: false,
            },
        );
        assert!(signals.is_empty());
        assert!(grid.sort().is_empty());
    }

    #[test]
    fn server_sorting_emits_request_without_local_mutation() {
        let rows = people();
        let mut grid = grid_with(GridOptions {
            sorting: SortingOptions {
                mode: ProcessMode::Server,
                ..Default::default()
            },
            ..Default::default()
        });

        let signals = grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "name".into(),
                additive: false,
            },
        );
        assert_eq!(
            signals[0],
            GridSignal::SortChanged(vec![SortKey::asc("name")])
        );
        let GridSignal::DataRequested(req) = &signals[1] else {
            panic!("expected a data request");
        };
        assert_eq!(req.seq, 1);
        assert_eq!(req.sort, vec![SortKey::asc("name")]);
        // Local state untouched until the caller writes the response back.
        assert!(grid.sort().is_empty());

        // A second click while the first response is in flight just issues a
        // fresh request with a higher sequence number.
        let signals = grid.handle_event(
            &rows,
            GridEvent::SortClick {
                column: "name".into(),
                additive: false,
            },
        );
        let GridSignal::DataRequested(req) = &signals[1] else {
            panic!("expected a data request");
        };
        assert_eq!(req.seq, 2);

        grid.set_sort(vec![SortKey::asc("name")]);
        assert_eq!(grid.sort(), &[SortKey::asc("name")]);
    }

    #[test]
    fn selection_signals_and_mutates_when_engine_owned() {
        let rows = people();
        let mut grid = multi_select_grid();
        let signals = grid.handle_event(
            &rows,
            GridEvent::SelectRow {
                id: RowId::Int(2),
                selected: true,
            },
        );
        assert_eq!(signals, vec![GridSignal::SelectionChanged(vec![RowId::Int(2)])]);
        assert!(grid.selection().is_selected(&RowId::Int(2)));
    }

    #[test]
    fn caller_owned_selection_only_emits() {
        let rows = people();
        let mut grid = grid_with(GridOptions {
            selection: SelectionOptions {
                mode: SelectionMode::Multi,
                owner: StateOwner::Caller,
            },
            ..Default::default()
        });
        let signals = grid.handle_event(
            &rows,
            GridEvent::SelectRow {
                id: RowId::Int(2),
                selected: true,
            },
        );
        assert_eq!(signals, vec![GridSignal::SelectionChanged(vec![RowId::Int(2)])]);
        assert!(grid.selection().is_empty());

        grid.set_selected(vec![RowId::Int(2)]);
        assert!(grid.selection().is_selected(&RowId::Int(2)));
    }

    #[test]
    fn select_all_covers_the_filtered_set() {
        let rows = people();
        let mut grid = multi_select_grid();
        grid.handle_event(
            &rows,
            GridEvent::SetFilters {
                filters: vec![Filter::new("status", "active")],
            },
        );
        grid.handle_event(&rows, GridEvent::SelectAll { selected: true });
        // Only the three active rows are selected.
        assert_eq!(grid.selection().len(), 3);
        assert!(grid.selection().is_selected(&RowId::Int(1)));
        assert!(!grid.selection().is_selected(&RowId::Int(2)));

        let model = grid.view(&rows);
        assert_eq!(model.select_all, SelectAllState::Checked);

        grid.handle_event(&rows, GridEvent::SelectAll { selected: false });
        assert!(grid.selection().is_empty());
    }

    #[test]
    fn display_states_short_circuit_in_order() {
        let rows = people();
        let mut grid = grid_with(GridOptions::default());

        grid.set_loading(true);
        grid.set_error(Some("boom".into()));
        let model = grid.view(&rows);
        assert_eq!(model.state, DisplayState::Loading);
        assert!(model.rows.is_empty());

        grid.set_loading(false);
        let model = grid.view(&rows);
        assert_eq!(model.state, DisplayState::Error);
        assert_eq!(model.error.as_deref(), Some("boom"));

        grid.set_error(None);
        grid.handle_event(
            &rows,
            GridEvent::SetFilters {
                filters: vec![Filter::new("name", "zzz")],
            },
        );
        let model = grid.view(&rows);
        assert_eq!(model.state, DisplayState::Empty);

        grid.handle_event(&rows, GridEvent::SetFilters { filters: vec![] });
        assert_eq!(grid.view(&rows).state, DisplayState::Ready);
    }

    #[test]
    fn small_lists_render_in_full_without_windowing() {
        let rows = people();
        let mut grid = grid_with(GridOptions {
            row_height: 50,
            container_height: 100,
            ..Default::default()
        });
        let model = grid.view(&rows);
        assert_eq!(model.rows.len(), rows.len());
        assert_eq!(model.start_index, 0);
        assert_eq!(model.offset_top, 0);
    }

    #[test]
    fn large_lists_window_to_the_viewport() {
        let rows: Vec<Person> = (0..1000).map(|i| person(i, "row", "active")).collect();
        let mut grid = grid_with(GridOptions {
            row_height: 50,
            container_height: 400,
            overscan: 5,
            ..Default::default()
        });
        grid.handle_event(&rows, GridEvent::Scroll { scroll_top: 2500 });
        let model = grid.view(&rows);
        assert_eq!(model.start_index, 45);
        assert_eq!(model.rows.len(), 63 - 45);
        assert_eq!(model.offset_top, 45 * 50);
        assert_eq!(model.total_height, 1000 * 50);
        assert_eq!(model.rows[0].index, 45);
    }

    #[test]
    fn scroll_past_the_end_clamps_on_view() {
        let rows: Vec<Person> = (0..1000).map(|i| person(i, "row", "active")).collect();
        let mut grid = grid_with(GridOptions {
            row_height: 50,
            container_height: 400,
            overscan: 0,
            ..Default::default()
        });
        grid.handle_event(&rows, GridEvent::ScrollToBottom);
        let model = grid.view(&rows);
        assert_eq!(grid.scroll_top(), 1000 * 50 - 400);
        assert_eq!(model.rows.last().unwrap().index, 999);
    }

    #[test]
    fn client_pagination_slices_and_reports_page_count() {
        let rows = people();
        let mut grid = grid_with(GridOptions {
            pagination: PaginationOptions {
                enabled: true,
                page_size: 2,
                ..Default::default()
            },
            ..Default::default()
        });

        let model = grid.view(&rows);
        assert_eq!(model.rows.len(), 2);
        assert_eq!(model.page_count, Some(3));
        assert_eq!(model.processed_count, 5);

        grid.handle_event(&rows, GridEvent::SetPage { index: 2 });
        let model = grid.view(&rows);
        assert_eq!(model.rows.len(), 1);
        assert_eq!(model.page_index, 2);

        grid.handle_event(&rows, GridEvent::SetPage { index: 9 });
        assert_eq!(grid.view(&rows).state, DisplayState::Empty);
    }

    #[test]
    fn duplicate_column_ids_are_rejected_at_construction() {
        let cols = vec![
            Column::new("name", |p: &Person| p.name.into()),
            Column::new("name", |p: &Person| CellValue::from(p.id)),
        ];
        assert!(DataGrid::new(cols).is_err());
    }

    #[test]
    fn row_id_collisions_surface_through_the_opt_in_check() {
        let rows = vec![person(1, "a", "x"), person(1, "b", "y")];
        let grid = multi_select_grid();
        assert!(grid.check_row_ids(&rows).is_err());
    }

    #[test]
    fn filters_passed_through_caller_ownership_do_not_mutate() {
        let rows = people();
        let mut grid = grid_with(GridOptions {
            filtering: FilteringOptions {
                owner: StateOwner::Caller,
                ..Default::default()
            },
            ..Default::default()
        });
        let filters = vec![Filter::new("status", "idle")];
        let signals = grid.handle_event(
            &rows,
            GridEvent::SetFilters {
                filters: filters.clone(),
            },
        );
        assert_eq!(signals, vec![GridSignal::FiltersChanged(filters.clone())]);
        assert!(grid.filters().is_empty());

        grid.set_filters(filters);
        assert_eq!(grid.view(&rows).processed_count, 2);
    }
}
