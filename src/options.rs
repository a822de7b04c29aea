//! Configuration for a [`VirtualScroller`](crate::VirtualScroller).

use alloc::sync::Arc;
use core::fmt;

use crate::types::{ContentPadding, Orientation, PerAxis, ScrollPosition, ViewportSize, Window};

/// Callback fired after the committed window changed, with the new window.
pub type OnWindowChangeCallback = Arc<dyn Fn(Window) + Send + Sync>;

/// Callback fired when lazy mode wants data for a window.
pub type OnLazyLoadCallback = Arc<dyn Fn(Window) + Send + Sync>;

/// Callback fired for every raw scroll sample, before any windowing.
pub type OnScrollCallback = Arc<dyn Fn(ScrollPosition) + Send + Sync>;

/// Options for [`VirtualScroller`](crate::VirtualScroller).
///
/// Cheap to clone; callbacks are shared through `Arc`s, so a widget can clone
/// the current options, tweak a field, and hand them back via
/// [`set_options`](crate::VirtualScroller::set_options).
pub struct ScrollerOptions {
    /// Number of items in the logical collection. Only lengths ever cross
    /// into the engine; the data itself stays with the caller.
    pub count: usize,
    /// Length of a parallel columns collection for tabular layouts.
    pub columns: Option<usize>,
    pub orientation: Orientation,
    /// Fixed per-item pixel size: uniform, or a `[row, col]` pair for grids.
    pub item_size: PerAxis<u32>,
    /// Overrides the computed overscan margin (in items, per axis).
    pub tolerance: Option<PerAxis<usize>>,
    /// Debounce quiet period in milliseconds. Zero commits every sample
    /// synchronously.
    pub delay_ms: u64,
    /// Emit load requests for each committed window instead of expecting the
    /// whole collection up front.
    pub lazy: bool,
    /// Initial loading flag. Lazy flows usually start `true` until the first
    /// chunk lands.
    pub loading: bool,
    /// Show a loading treatment while the loading flag is set.
    pub show_loader: bool,
    /// Replace the overlay loader with inline placeholder items.
    pub loader_disabled: bool,
    /// Bypass windowing entirely; the full collection renders.
    pub disabled: bool,
    /// Explicit scrollable extents overriding the measured viewport.
    pub scroll_width: Option<u32>,
    pub scroll_height: Option<u32>,
    /// Container size known at construction, ahead of the first measurement.
    pub initial_viewport: Option<ViewportSize>,
    /// Fixed content offsets inside the container.
    pub content_padding: ContentPadding,
    pub on_window_change: Option<OnWindowChangeCallback>,
    pub on_lazy_load: Option<OnLazyLoadCallback>,
    pub on_scroll: Option<OnScrollCallback>,
}

impl ScrollerOptions {
    /// Options for a `count`-item collection with a fixed per-item pixel
    /// size. Everything else starts at its default.
    pub fn new(count: usize, item_size: impl Into<PerAxis<u32>>) -> Self {
        Self {
            count,
            columns: None,
            orientation: Orientation::Vertical,
            item_size: item_size.into(),
            tolerance: None,
            delay_ms: 0,
            lazy: false,
            loading: false,
            show_loader: false,
            loader_disabled: false,
            disabled: false,
            scroll_width: None,
            scroll_height: None,
            initial_viewport: None,
            content_padding: ContentPadding::default(),
            on_window_change: None,
            on_lazy_load: None,
            on_scroll: None,
        }
    }

    pub fn with_columns(mut self, columns: Option<usize>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_item_size(mut self, item_size: impl Into<PerAxis<u32>>) -> Self {
        self.item_size = item_size.into();
        self
    }

    pub fn with_tolerance(mut self, tolerance: Option<PerAxis<usize>>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_show_loader(mut self, show_loader: bool) -> Self {
        self.show_loader = show_loader;
        self
    }

    pub fn with_loader_disabled(mut self, loader_disabled: bool) -> Self {
        self.loader_disabled = loader_disabled;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_scroll_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.scroll_width = width;
        self.scroll_height = height;
        self
    }

    pub fn with_initial_viewport(mut self, viewport: Option<ViewportSize>) -> Self {
        self.initial_viewport = viewport;
        self
    }

    pub fn with_content_padding(mut self, padding: ContentPadding) -> Self {
        self.content_padding = padding;
        self
    }

    pub fn with_on_window_change(
        mut self,
        cb: Option<impl Fn(Window) + Send + Sync + 'static>,
    ) -> Self {
        self.on_window_change = cb.map(|f| Arc::new(f) as OnWindowChangeCallback);
        self
    }

    pub fn with_on_lazy_load(
        mut self,
        cb: Option<impl Fn(Window) + Send + Sync + 'static>,
    ) -> Self {
        self.on_lazy_load = cb.map(|f| Arc::new(f) as OnLazyLoadCallback);
        self
    }

    pub fn with_on_scroll(
        mut self,
        cb: Option<impl Fn(ScrollPosition) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = cb.map(|f| Arc::new(f) as OnScrollCallback);
        self
    }
}

impl Clone for ScrollerOptions {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            columns: self.columns,
            orientation: self.orientation,
            item_size: self.item_size,
            tolerance: self.tolerance,
            delay_ms: self.delay_ms,
            lazy: self.lazy,
            loading: self.loading,
            show_loader: self.show_loader,
            loader_disabled: self.loader_disabled,
            disabled: self.disabled,
            scroll_width: self.scroll_width,
            scroll_height: self.scroll_height,
            initial_viewport: self.initial_viewport,
            content_padding: self.content_padding,
            on_window_change: self.on_window_change.clone(),
            on_lazy_load: self.on_lazy_load.clone(),
            on_scroll: self.on_scroll.clone(),
        }
    }
}

impl fmt::Debug for ScrollerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollerOptions")
            .field("count", &self.count)
            .field("columns", &self.columns)
            .field("orientation", &self.orientation)
            .field("item_size", &self.item_size)
            .field("tolerance", &self.tolerance)
            .field("delay_ms", &self.delay_ms)
            .field("lazy", &self.lazy)
            .field("loading", &self.loading)
            .field("show_loader", &self.show_loader)
            .field("loader_disabled", &self.loader_disabled)
            .field("disabled", &self.disabled)
            .field("scroll_width", &self.scroll_width)
            .field("scroll_height", &self.scroll_height)
            .field("initial_viewport", &self.initial_viewport)
            .field("content_padding", &self.content_padding)
            .finish_non_exhaustive()
    }
}
