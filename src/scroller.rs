//! The windowed-scrolling engine.

use alloc::sync::Arc;

use crate::geometry::{self, AxisGeometry};
use crate::loader::{Debounce, LoadingPhase, PendingScroll};
use crate::options::{
    OnLazyLoadCallback, OnScrollCallback, OnWindowChangeCallback, ScrollerOptions,
};
use crate::selector;
use crate::state::ScrollerState;
use crate::types::{
    AxisRange, ContentPadding, ItemContext, Orientation, PerAxis, RenderPlan, RenderedRange,
    ScrollBehavior, ScrollEdge, ScrollPhase, ScrollPosition, ScrollRequest, SpacerSize,
    Translation, ViewportSize, Window,
};
use crate::window::{self, AxisTracker};

/// A headless windowed-scrolling engine.
///
/// One instance tracks the committed render window for one scrollable
/// container. The embedding widget feeds it viewport measurements and raw
/// scroll samples, and reads back the window, the spacer extent, and the
/// content translation. Items never cross into the engine; it works purely
/// with lengths and pixel sizes.
///
/// Programmatic scrolls come back as [`ScrollRequest`] values because only
/// the widget can move the real container.
#[derive(Clone, Debug)]
pub struct VirtualScroller {
    options: ScrollerOptions,
    viewport: ViewportSize,
    rows: AxisTracker,
    cols: AxisTracker,
    row_geo: AxisGeometry,
    col_geo: AxisGeometry,
    loading: LoadingPhase,
    debounce: Debounce,
}

impl VirtualScroller {
    /// Creates an engine and computes the initial window from the options.
    ///
    /// In lazy mode the initial window is immediately emitted as a load
    /// request.
    pub fn new(options: ScrollerOptions) -> Self {
        let viewport = options.initial_viewport.unwrap_or_default();
        let loading = if options.loading {
            LoadingPhase::Pending
        } else {
            LoadingPhase::Idle
        };
        vs_debug!(
            count = options.count,
            delay_ms = options.delay_ms,
            lazy = options.lazy,
            "VirtualScroller::new"
        );
        let mut scroller = Self {
            options,
            viewport,
            rows: AxisTracker::default(),
            cols: AxisTracker::default(),
            row_geo: AxisGeometry::default(),
            col_geo: AxisGeometry::default(),
            loading,
            debounce: Debounce::default(),
        };
        scroller.reinitialize();
        scroller
    }

    pub fn options(&self) -> &ScrollerOptions {
        &self.options
    }

    /// Replaces the options wholesale.
    ///
    /// Geometry-affecting changes reset the window to the start of the
    /// collection; in lazy mode the loading flag follows the new options.
    /// Prefer the targeted setters when only one input changed.
    pub fn set_options(&mut self, options: ScrollerOptions) {
        let geometry_changed = options.count != self.options.count
            || options.columns != self.options.columns
            || options.orientation != self.options.orientation
            || options.item_size != self.options.item_size
            || options.tolerance != self.options.tolerance
            || options.scroll_width != self.options.scroll_width
            || options.scroll_height != self.options.scroll_height
            || options.content_padding != self.options.content_padding;
        let loading_changed = options.loading != self.options.loading;
        self.options = options;
        if self.options.lazy && loading_changed {
            self.set_loading(self.options.loading);
        }
        if geometry_changed {
            self.reinitialize();
        }
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`set_options`](Self::set_options).
    pub fn update_options(&mut self, f: impl FnOnce(&mut ScrollerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    fn rows_active(&self) -> bool {
        matches!(
            self.options.orientation,
            Orientation::Vertical | Orientation::Both
        )
    }

    fn cols_active(&self) -> bool {
        matches!(
            self.options.orientation,
            Orientation::Horizontal | Orientation::Both
        )
    }

    fn row_count(&self) -> usize {
        self.options.count
    }

    /// Length the column axis windows over: the parallel columns collection
    /// when configured, otherwise the items themselves in horizontal mode.
    /// A grid without a configured column length cannot window columns.
    fn col_count(&self) -> usize {
        match self.options.orientation {
            Orientation::Horizontal => self.options.columns.unwrap_or(self.options.count),
            _ => self.options.columns.unwrap_or(0),
        }
    }

    fn rebuild_geometry(&mut self) {
        let width = self.options.scroll_width.unwrap_or(self.viewport.width);
        let height = self.options.scroll_height.unwrap_or(self.viewport.height);
        let padding = self.options.content_padding;
        // Leading padding eats into the area items can occupy.
        let content_height = height.saturating_sub(padding.top);
        let content_width = width.saturating_sub(padding.left);
        let item = self.options.item_size;
        let tolerance = self.options.tolerance;
        self.row_geo =
            AxisGeometry::compute(content_height, item.row(), tolerance.map(|t| t.row()));
        self.col_geo = AxisGeometry::compute(content_width, item.col(), tolerance.map(|t| t.col()));
    }

    /// Recomputes geometry and snaps both axes back to the start of the
    /// collection.
    ///
    /// Runs at construction and whenever a geometry input changes. A parked
    /// debounce sample indexed the old geometry and is dropped. Lazy mode
    /// re-emits the fresh window as a load request.
    fn reinitialize(&mut self) {
        self.cancel_pending();
        self.rebuild_geometry();
        let rows = window::anchored_range(0, &self.row_geo, self.row_count());
        let cols = window::anchored_range(0, &self.col_geo, self.col_count());
        self.rows.reset(rows);
        self.cols.reset(cols);
        vs_debug!(
            row_capacity = self.row_geo.capacity,
            row_tolerance = self.row_geo.tolerance,
            row_last = rows.last,
            col_last = cols.last,
            "reinitialize"
        );
        self.emit_lazy();
    }

    fn emit_lazy(&self) {
        if !self.options.lazy {
            return;
        }
        if let Some(cb) = &self.options.on_lazy_load {
            cb(self.window());
        }
    }

    fn shape(&self, rows: AxisRange, cols: AxisRange) -> Window {
        match self.options.orientation {
            Orientation::Vertical => Window::Axis(rows),
            Orientation::Horizontal => Window::Axis(cols),
            Orientation::Both => Window::Grid { rows, cols },
        }
    }

    /// Feeds one raw scroll sample with a timestamp from the caller's clock.
    ///
    /// The raw pass-through callback always fires. Without a configured
    /// delay the sample commits synchronously; otherwise it parks until
    /// [`tick`](Self::tick) passes the deadline, and only the newest sample
    /// inside the quiet period survives.
    pub fn apply_scroll_event(&mut self, position: ScrollPosition, now_ms: u64) {
        if let Some(cb) = &self.options.on_scroll {
            cb(position);
        }
        if self.options.disabled {
            return;
        }
        vs_trace!(
            top = position.top,
            left = position.left,
            now_ms,
            "apply_scroll_event"
        );

        let padding = self.options.content_padding;
        let top = position.top.saturating_sub(padding.top as u64);
        let left = position.left.saturating_sub(padding.left as u64);
        // Direction is captured per sample; replaying the same sample later
        // must not compare it against the memory it just wrote.
        let row_phase = self.rows.observe(top);
        let col_phase = self.cols.observe(left);

        if self.options.delay_ms == 0 {
            self.commit_sample(top, left, row_phase, col_phase);
            return;
        }

        let mut raised = self
            .debounce
            .cancel()
            .is_some_and(|prev| prev.raised_loading);
        if !raised
            && self.options.show_loader
            && !self.loading.is_loading()
            && self.predicts_change(top, left, row_phase, col_phase)
        {
            self.loading = LoadingPhase::Pending;
            raised = true;
        }
        self.debounce.arm(PendingScroll {
            top,
            left,
            row_phase,
            col_phase,
            deadline_ms: now_ms.saturating_add(self.options.delay_ms),
            raised_loading: raised,
        });
    }

    /// Advances the cooperative clock, processing a parked sample whose
    /// quiet period has elapsed. Returns whether a sample was taken; the
    /// window only moves if the sample crossed a trigger.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(sample) = self.debounce.take_due(now_ms) else {
            return false;
        };
        vs_trace!(now_ms, "tick commits deferred sample");
        self.commit_sample(sample.top, sample.left, sample.row_phase, sample.col_phase);
        if !self.options.lazy {
            self.loading = LoadingPhase::Idle;
        }
        true
    }

    /// Milliseconds until a parked sample commits, if one is parked.
    pub fn time_until_commit(&self, now_ms: u64) -> Option<u64> {
        self.debounce.time_until_due(now_ms)
    }

    pub fn has_pending(&self) -> bool {
        self.debounce.is_armed()
    }

    /// Drops a parked sample without committing it. A loading flag the
    /// sample raised optimistically is dropped with it; lazy flows keep
    /// external control of the flag.
    pub fn cancel_pending(&mut self) -> bool {
        let Some(sample) = self.debounce.cancel() else {
            return false;
        };
        if sample.raised_loading && !self.options.lazy {
            self.loading = LoadingPhase::Idle;
        }
        true
    }

    fn candidate_ranges(
        &self,
        top: u64,
        left: u64,
        row_phase: ScrollPhase,
        col_phase: ScrollPhase,
    ) -> (AxisRange, AxisRange) {
        let rows = if self.rows_active() {
            let current = geometry::index_at(top, self.row_geo.item_size);
            window::next_range(
                self.rows.range,
                &self.row_geo,
                current,
                row_phase,
                self.row_count(),
            )
        } else {
            self.rows.range
        };
        let cols = if self.cols_active() {
            let current = geometry::index_at(left, self.col_geo.item_size);
            window::next_range(
                self.cols.range,
                &self.col_geo,
                current,
                col_phase,
                self.col_count(),
            )
        } else {
            self.cols.range
        };
        (rows, cols)
    }

    fn commit_needed(&self, rows: AxisRange, cols: AxisRange) -> bool {
        (self.rows_active() && window::both_edges_moved(self.rows.range, rows))
            || (self.cols_active() && window::both_edges_moved(self.cols.range, cols))
    }

    /// Whether committing the sample would move the window, without touching
    /// any state. Drives the optimistic loading flag for debounced samples.
    fn predicts_change(
        &self,
        top: u64,
        left: u64,
        row_phase: ScrollPhase,
        col_phase: ScrollPhase,
    ) -> bool {
        let (rows, cols) = self.candidate_ranges(top, left, row_phase, col_phase);
        self.commit_needed(rows, cols)
    }

    fn commit_sample(
        &mut self,
        top: u64,
        left: u64,
        row_phase: ScrollPhase,
        col_phase: ScrollPhase,
    ) {
        let (rows, cols) = self.candidate_ranges(top, left, row_phase, col_phase);
        if !self.commit_needed(rows, cols) {
            return;
        }
        // One axis crossing its trigger commits both: the ranges were
        // computed from the same sample and must stay consistent.
        self.rows.range = rows;
        self.cols.range = cols;
        vs_debug!(
            row_first = rows.first,
            row_last = rows.last,
            col_first = cols.first,
            col_last = cols.last,
            "window committed"
        );
        let committed = self.window();
        if let Some(cb) = &self.options.on_window_change {
            cb(committed);
        }
        self.emit_lazy();
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn loading_phase(&self) -> LoadingPhase {
        self.loading
    }

    /// External loading control for lazy flows: set when a fetch is issued,
    /// cleared when the data lands.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = if loading {
            LoadingPhase::Pending
        } else {
            LoadingPhase::Idle
        };
    }

    /// Passes a raw scroll command through, cancelling any parked sample
    /// that would later overwrite its effect.
    pub fn scroll_to(&mut self, request: ScrollRequest) -> ScrollRequest {
        self.cancel_pending();
        request
    }

    /// Re-anchors the window so `index` starts it and returns the matching
    /// container scroll command.
    ///
    /// An index inside the leading tolerance band anchors at zero instead.
    /// Returns `None` when the window would not move or the index is out of
    /// range. Grid mode takes a `[row, col]` pair.
    pub fn scroll_to_index(
        &mut self,
        index: impl Into<PerAxis<usize>>,
        behavior: ScrollBehavior,
    ) -> Option<ScrollRequest> {
        if self.options.disabled {
            return None;
        }
        let index = index.into();
        let padding = self.options.content_padding;

        let mut changed = false;
        let mut top = 0u64;
        let mut left = 0u64;
        let mut rows = self.rows.range;
        let mut cols = self.cols.range;

        if self.rows_active() {
            let count = self.row_count();
            let target = index.row();
            if target >= count {
                vs_warn!(index = target, count, "scroll_to_index out of range");
                return None;
            }
            let first = if target <= self.row_geo.tolerance {
                0
            } else {
                target
            };
            if first != self.rows.range.first {
                changed = true;
                rows = window::anchored_range(first, &self.row_geo, count);
            }
            top = (first as u64)
                .saturating_mul(self.row_geo.item_size as u64)
                .saturating_add(padding.top as u64);
        }
        if self.cols_active() {
            let count = self.col_count();
            let target = index.col();
            if target >= count {
                vs_warn!(index = target, count, "scroll_to_index out of range");
                return None;
            }
            let first = if target <= self.col_geo.tolerance {
                0
            } else {
                target
            };
            if first != self.cols.range.first {
                changed = true;
                cols = window::anchored_range(first, &self.col_geo, count);
            }
            left = (first as u64)
                .saturating_mul(self.col_geo.item_size as u64)
                .saturating_add(padding.left as u64);
        }
        if !changed {
            return None;
        }

        self.cancel_pending();
        self.rows.range = rows;
        self.cols.range = cols;
        // Pre-seed scroll memory with the destination so the echo scroll
        // event the command produces reads as a settled no-op.
        self.rows.last_scroll_pos = top.saturating_sub(padding.top as u64);
        self.cols.last_scroll_pos = left.saturating_sub(padding.left as u64);
        self.rows.phase = ScrollPhase::Settled;
        self.cols.phase = ScrollPhase::Settled;
        vs_trace!(top, left, "scroll_to_index");

        let committed = self.window();
        if let Some(cb) = &self.options.on_window_change {
            cb(committed);
        }
        self.emit_lazy();

        Some(ScrollRequest { left, top, behavior })
    }

    /// Nudges the container by one item when `index` sits outside the given
    /// edge of the live viewport; inside it, nothing happens. Without an
    /// edge hint this is [`scroll_to_index`](Self::scroll_to_index).
    pub fn scroll_in_view(
        &mut self,
        index: impl Into<PerAxis<usize>>,
        edge: Option<ScrollEdge>,
        behavior: ScrollBehavior,
    ) -> Option<ScrollRequest> {
        let index = index.into();
        let Some(edge) = edge else {
            return self.scroll_to_index(index, behavior);
        };
        if self.options.disabled {
            return None;
        }
        if (self.rows_active() && index.row() >= self.row_count())
            || (self.cols_active() && index.col() >= self.col_count())
        {
            return None;
        }

        let (vp_rows, vp_cols) = self.viewport_estimate();
        let row_size = self.row_geo.item_size as u64;
        let col_size = self.col_geo.item_size as u64;

        let request = match edge {
            ScrollEdge::ToStart => {
                if self.rows_active() && index.row() < vp_rows.first {
                    let top = (vp_rows.first as u64)
                        .saturating_sub(1)
                        .saturating_mul(row_size);
                    let left = if self.cols_active() {
                        (vp_cols.first as u64).saturating_mul(col_size)
                    } else {
                        0
                    };
                    Some(ScrollRequest { left, top, behavior })
                } else if self.cols_active() && index.col() < vp_cols.first {
                    let left = (vp_cols.first as u64)
                        .saturating_sub(1)
                        .saturating_mul(col_size);
                    let top = if self.rows_active() {
                        (vp_rows.first as u64).saturating_mul(row_size)
                    } else {
                        0
                    };
                    Some(ScrollRequest { left, top, behavior })
                } else {
                    None
                }
            }
            ScrollEdge::ToEnd => {
                if self.rows_active() && index.row() + 1 >= vp_rows.last {
                    let top = (vp_rows.first as u64)
                        .saturating_add(1)
                        .saturating_mul(row_size);
                    let left = if self.cols_active() {
                        (vp_cols.first as u64).saturating_mul(col_size)
                    } else {
                        0
                    };
                    Some(ScrollRequest { left, top, behavior })
                } else if self.cols_active() && index.col() + 1 >= vp_cols.last {
                    let left = (vp_cols.first as u64)
                        .saturating_add(1)
                        .saturating_mul(col_size);
                    let top = if self.rows_active() {
                        (vp_rows.first as u64).saturating_mul(row_size)
                    } else {
                        0
                    };
                    Some(ScrollRequest { left, top, behavior })
                } else {
                    None
                }
            }
        };
        request.map(|r| self.scroll_to(r))
    }

    /// The committed window, shaped by the orientation.
    ///
    /// Meaningful only while windowing is active; with `disabled` set, the
    /// render plan is the authority.
    pub fn window(&self) -> Window {
        self.shape(self.rows.range, self.cols.range)
    }

    fn axis_viewport(&self, pos: u64, geo: &AxisGeometry, count: usize) -> AxisRange {
        let first = geometry::index_at(pos, geo.item_size).min(count);
        let last = first.saturating_add(geo.capacity).min(count);
        AxisRange { first, last }
    }

    fn viewport_estimate(&self) -> (AxisRange, AxisRange) {
        (
            self.axis_viewport(self.rows.last_scroll_pos, &self.row_geo, self.row_count()),
            self.axis_viewport(self.cols.last_scroll_pos, &self.col_geo, self.col_count()),
        )
    }

    /// The committed window paired with a viewport estimate from the most
    /// recent scroll offsets.
    pub fn rendered_range(&self) -> RenderedRange {
        let (rows, cols) = self.viewport_estimate();
        RenderedRange {
            window: self.window(),
            viewport: self.shape(rows, cols),
        }
    }

    /// Like [`rendered_range`](Self::rendered_range), but estimates the
    /// viewport from a caller-supplied position instead of the remembered
    /// offsets.
    pub fn rendered_range_at(&self, position: ScrollPosition) -> RenderedRange {
        let padding = self.options.content_padding;
        let top = position.top.saturating_sub(padding.top as u64);
        let left = position.left.saturating_sub(padding.left as u64);
        let rows = self.axis_viewport(top, &self.row_geo, self.row_count());
        let cols = self.axis_viewport(left, &self.col_geo, self.col_count());
        RenderedRange {
            window: self.window(),
            viewport: self.shape(rows, cols),
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn orientation(&self) -> Orientation {
        self.options.orientation
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn is_disabled(&self) -> bool {
        self.options.disabled
    }

    /// Items that fit the content area, per axis.
    pub fn items_in_viewport(&self) -> PerAxis<usize> {
        match self.options.orientation {
            Orientation::Vertical => PerAxis::Uniform(self.row_geo.capacity),
            Orientation::Horizontal => PerAxis::Uniform(self.col_geo.capacity),
            Orientation::Both => PerAxis::Grid {
                row: self.row_geo.capacity,
                col: self.col_geo.capacity,
            },
        }
    }

    /// Effective overscan margin, per axis.
    pub fn tolerance(&self) -> PerAxis<usize> {
        match self.options.orientation {
            Orientation::Vertical => PerAxis::Uniform(self.row_geo.tolerance),
            Orientation::Horizontal => PerAxis::Uniform(self.col_geo.tolerance),
            Orientation::Both => PerAxis::Grid {
                row: self.row_geo.tolerance,
                col: self.col_geo.tolerance,
            },
        }
    }

    /// Travel state of the row and column axes, in that order.
    pub fn scroll_phase(&self) -> (ScrollPhase, ScrollPhase) {
        (self.rows.phase, self.cols.phase)
    }

    /// Total extent the widget should give its spacer element so the
    /// container scrolls over the whole collection.
    pub fn spacer_size(&self) -> SpacerSize {
        let padding = self.options.content_padding;
        let height = (self.row_count() as u64)
            .saturating_mul(self.row_geo.item_size as u64)
            .saturating_add(padding.y() as u64);
        let width = (self.col_count() as u64)
            .saturating_mul(self.col_geo.item_size as u64)
            .saturating_add(padding.x() as u64);
        match self.options.orientation {
            Orientation::Vertical => SpacerSize { width: 0, height },
            Orientation::Horizontal => SpacerSize { width, height: 0 },
            Orientation::Both => SpacerSize { width, height },
        }
    }

    /// Translation that places the rendered slice at the committed window's
    /// leading edge.
    pub fn content_translation(&self) -> Translation {
        let y = (self.rows.range.first as u64).saturating_mul(self.row_geo.item_size as u64);
        let x = (self.cols.range.first as u64).saturating_mul(self.col_geo.item_size as u64);
        match self.options.orientation {
            Orientation::Vertical => Translation { x: 0, y },
            Orientation::Horizontal => Translation { x, y: 0 },
            Orientation::Both => Translation { x, y },
        }
    }

    /// What the widget should materialize right now.
    pub fn render_plan(&self) -> RenderPlan {
        if self.options.disabled {
            return RenderPlan::Full;
        }
        if self.loading.is_loading() {
            if self.options.show_loader && self.options.loader_disabled {
                let rows = if self.rows_active() {
                    self.row_geo.capacity
                } else {
                    0
                };
                let cols = if self.cols_active() {
                    self.col_geo.capacity
                } else {
                    0
                };
                return RenderPlan::Loader { rows, cols };
            }
            return RenderPlan::Empty;
        }
        RenderPlan::Window(self.window())
    }

    /// Whether the widget's overlay loader should be visible.
    pub fn loader_overlay_active(&self) -> bool {
        self.options.show_loader && !self.options.loader_disabled && self.loading.is_loading()
    }

    /// Slice of `items` the committed window selects, re-clamped against the
    /// slice length.
    ///
    /// Returns everything when windowing is disabled and nothing while
    /// loading. In horizontal mode with a configured columns collection the
    /// rows pass through unwindowed; only the columns narrow.
    pub fn visible_rows<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.options.disabled {
            return items;
        }
        if self.loading.is_loading() {
            return &[];
        }
        match self.options.orientation {
            Orientation::Vertical | Orientation::Both => {
                selector::slice_range(items, self.rows.range)
            }
            Orientation::Horizontal => {
                if self.options.columns.is_some() {
                    items
                } else {
                    selector::slice_range(items, self.cols.range)
                }
            }
        }
    }

    /// Slice of a parallel `columns` collection for the committed column
    /// window. Vertical mode passes columns through untouched.
    pub fn visible_columns<'a, C>(&self, columns: &'a [C]) -> &'a [C] {
        if self.options.disabled {
            return columns;
        }
        match self.options.orientation {
            Orientation::Horizontal | Orientation::Both => {
                if self.loading.is_loading() && self.options.loader_disabled {
                    &[]
                } else {
                    selector::slice_range(columns, self.cols.range)
                }
            }
            Orientation::Vertical => columns,
        }
    }

    /// Column-window slice of one retained row's cells in grid mode.
    ///
    /// Callers whose columns are driven by a parallel definition collection
    /// slice that once through [`visible_columns`](Self::visible_columns)
    /// and leave row cells whole instead of calling this.
    pub fn visible_grid_row<'a, T>(&self, row: &'a [T]) -> &'a [T] {
        if self.options.disabled || !self.options.orientation.is_both() {
            return row;
        }
        selector::slice_range(row, self.cols.range)
    }

    /// Runs `f` over the visible slice of `items` with presentation metadata
    /// for each entry.
    pub fn for_each_visible<'a, T>(&self, items: &'a [T], mut f: impl FnMut(&'a T, ItemContext)) {
        let count = items.len();
        for (offset, item) in self.visible_rows(items).iter().enumerate() {
            f(item, self.context_at(offset, count));
        }
    }

    /// Presentation hints for the item at `offset` within the rendered
    /// slice, relative to the full collection.
    pub fn item_context(&self, offset: usize) -> ItemContext {
        self.context_at(offset, self.options.count)
    }

    fn context_at(&self, offset: usize, count: usize) -> ItemContext {
        if self.options.disabled {
            return selector::item_context(offset, count);
        }
        let first = match self.options.orientation {
            Orientation::Horizontal => self.cols.range.first,
            _ => self.rows.range.first,
        };
        selector::item_context(first.saturating_add(offset), count)
    }

    /// Presentation hints for placeholder `index` while the loader plan is
    /// active.
    pub fn loader_context(&self, index: usize) -> ItemContext {
        let count = match self.render_plan() {
            RenderPlan::Loader { rows, .. } if rows > 0 => rows,
            RenderPlan::Loader { cols, .. } => cols,
            _ => 0,
        };
        selector::item_context(index, count)
    }

    /// Snapshot of the windowing state for persistence across remounts.
    pub fn state(&self) -> ScrollerState {
        ScrollerState {
            window: self.window(),
            scroll: ScrollPosition {
                top: self.rows.last_scroll_pos,
                left: self.cols.last_scroll_pos,
            },
            loading: self.is_loading(),
        }
    }

    /// Restores a snapshot, re-clamping its window against the current
    /// geometry. Scroll phases come back settled.
    pub fn restore_state(&mut self, state: ScrollerState) {
        self.cancel_pending();
        let (rows, cols) = match state.window {
            Window::Axis(range) => match self.options.orientation {
                Orientation::Horizontal => (self.rows.range, range),
                _ => (range, self.cols.range),
            },
            Window::Grid { rows, cols } => (rows, cols),
        };
        let row_count = self.row_count();
        let col_count = self.col_count();
        if rows.last > row_count || cols.last > col_count {
            vs_warn!(
                row_last = rows.last,
                row_count,
                "restore_state clamps a stale window"
            );
        }
        self.rows.range = selector::clamp_range(rows, row_count);
        self.cols.range = selector::clamp_range(cols, col_count);
        self.rows.last_scroll_pos = state.scroll.top;
        self.cols.last_scroll_pos = state.scroll.left;
        self.rows.phase = ScrollPhase::Settled;
        self.cols.phase = ScrollPhase::Settled;
        self.set_loading(state.loading);
    }

    /// Updates the measured container size. The mount and resize path.
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.reinitialize();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.reinitialize();
    }

    pub fn set_columns(&mut self, columns: Option<usize>) {
        if self.options.columns == columns {
            return;
        }
        self.options.columns = columns;
        self.reinitialize();
    }

    pub fn set_item_size(&mut self, item_size: impl Into<PerAxis<u32>>) {
        let item_size = item_size.into();
        if self.options.item_size == item_size {
            return;
        }
        self.options.item_size = item_size;
        self.reinitialize();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.options.orientation == orientation {
            return;
        }
        self.options.orientation = orientation;
        self.reinitialize();
    }

    pub fn set_tolerance(&mut self, tolerance: Option<PerAxis<usize>>) {
        if self.options.tolerance == tolerance {
            return;
        }
        self.options.tolerance = tolerance;
        self.reinitialize();
    }

    pub fn set_content_padding(&mut self, padding: ContentPadding) {
        if self.options.content_padding == padding {
            return;
        }
        self.options.content_padding = padding;
        self.reinitialize();
    }

    /// Overrides the scrollable extents independently of the measured
    /// viewport. `None` falls back to the measurement.
    pub fn set_scroll_size(&mut self, width: Option<u32>, height: Option<u32>) {
        if self.options.scroll_width == width && self.options.scroll_height == height {
            return;
        }
        self.options.scroll_width = width;
        self.options.scroll_height = height;
        self.reinitialize();
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) {
        self.options.delay_ms = delay_ms;
    }

    pub fn set_lazy(&mut self, lazy: bool) {
        self.options.lazy = lazy;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    pub fn set_show_loader(&mut self, show_loader: bool) {
        self.options.show_loader = show_loader;
    }

    pub fn set_loader_disabled(&mut self, loader_disabled: bool) {
        self.options.loader_disabled = loader_disabled;
    }

    pub fn set_on_window_change(&mut self, cb: Option<impl Fn(Window) + Send + Sync + 'static>) {
        self.options.on_window_change = cb.map(|f| Arc::new(f) as OnWindowChangeCallback);
    }

    pub fn set_on_lazy_load(&mut self, cb: Option<impl Fn(Window) + Send + Sync + 'static>) {
        self.options.on_lazy_load = cb.map(|f| Arc::new(f) as OnLazyLoadCallback);
    }

    pub fn set_on_scroll(&mut self, cb: Option<impl Fn(ScrollPosition) + Send + Sync + 'static>) {
        self.options.on_scroll = cb.map(|f| Arc::new(f) as OnScrollCallback);
    }
}
