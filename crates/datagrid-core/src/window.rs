/// Row count at or above which windowing engages by default. Below it, the
/// full processed list is cheap enough to hand to the view layer directly.
pub const DEFAULT_VIRTUALIZE_THRESHOLD: usize = 100;

/// The visible slice of the processed row list, plus the geometry the view
/// layer needs to position it (spacer above, total scrollable height).
///
/// Derived on every computation, never stored. Offsets are `u64` and sizes
/// `u32` so very large row counts cannot overflow the total height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// First rendered row index (inclusive).
    pub start: usize,
    /// One past the last rendered row index. `start <= end <= row_count`.
    pub end: usize,
    /// Pixel offset of `start`, i.e. `start * row_height`.
    pub offset_top: u64,
    /// `row_count * row_height`.
    pub total_height: u64,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute the rendered row range for the current scroll position.
///
/// O(1) per call: fixed row height means the range is pure arithmetic, so
/// recomputing on every scroll tick is safe. Overscan pads the raw visible
/// range symmetrically before clamping to `[0, row_count]`.
pub fn compute_window(
    row_count: usize,
    row_height: u32,
    scroll_top: u64,
    container_height: u32,
    overscan: usize,
) -> Window {
    let row_height = row_height.max(1) as u64;
    let total_height = row_count as u64 * row_height;

    let raw_start = (scroll_top / row_height) as usize;
    let raw_end = (scroll_top + container_height as u64).div_ceil(row_height) as usize;

    let start = raw_start.saturating_sub(overscan).min(row_count);
    let end = raw_end.saturating_add(overscan).min(row_count);
    let end = end.max(start);

    Window {
        start,
        end,
        offset_top: start as u64 * row_height,
        total_height,
    }
}

/// Scroll-position state for a windowed grid.
///
/// Mirrors the surface of a scrollable viewport: relative and absolute
/// scrolling, paging, and clamping against the content height.
#[derive(Clone, Copy, Debug)]
pub struct WindowState {
    pub scroll_top: u64,
    pub row_height: u32,
    pub container_height: u32,
    pub overscan: usize,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            scroll_top: 0,
            row_height: 1,
            container_height: 0,
            overscan: 2,
        }
    }
}

impl WindowState {
    pub fn new(row_height: u32, container_height: u32, overscan: usize) -> Self {
        Self {
            scroll_top: 0,
            row_height,
            container_height,
            overscan,
        }
    }

    pub fn set_viewport(&mut self, container_height: u32) {
        self.container_height = container_height;
    }

    pub fn scroll_to(&mut self, scroll_top: u64, row_count: usize) {
        self.scroll_top = scroll_top.min(self.max_scroll(row_count));
    }

    pub fn scroll_by(&mut self, delta: i64, row_count: usize) {
        let next = self.scroll_top.saturating_add_signed(delta);
        self.scroll_top = next.min(self.max_scroll(row_count));
    }

    pub fn page_down(&mut self, row_count: usize) {
        self.scroll_by(self.container_height as i64, row_count);
    }

    pub fn page_up(&mut self, row_count: usize) {
        self.scroll_by(-(self.container_height as i64), row_count);
    }

    pub fn to_top(&mut self) {
        self.scroll_top = 0;
    }

    pub fn to_bottom(&mut self, row_count: usize) {
        self.scroll_top = self.max_scroll(row_count);
    }

    /// Clamp the scroll position after the row count shrank.
    pub fn clamp(&mut self, row_count: usize) {
        self.scroll_top = self.scroll_top.min(self.max_scroll(row_count));
    }

    pub fn window(&self, row_count: usize) -> Window {
        compute_window(
            row_count,
            self.row_height,
            self.scroll_top,
            self.container_height,
            self.overscan,
        )
    }

    pub fn total_height(&self, row_count: usize) -> u64 {
        row_count as u64 * self.row_height.max(1) as u64
    }

    fn max_scroll(&self, row_count: usize) -> u64 {
        self.total_height(row_count)
            .saturating_sub(self.container_height as u64)
    }
}
