//! Public value types shared across the crate.

/// Scroll axis mode of the windowed container.
///
/// Fixed for the lifetime of a mounted widget in practice; changing it resets
/// the window and scroll memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Window rows along the vertical axis.
    #[default]
    Vertical,
    /// Window items (or a columns collection) along the horizontal axis.
    Horizontal,
    /// Window rows and columns independently.
    Both,
}

impl Orientation {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    pub fn is_both(self) -> bool {
        matches!(self, Self::Both)
    }
}

/// A per-axis value: one shared number, or a distinct row/column pair for
/// two-axis grids.
///
/// `From` conversions keep call sites short: a bare value becomes `Uniform`,
/// a `[row, col]` array becomes `Grid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerAxis<T> {
    Uniform(T),
    Grid { row: T, col: T },
}

impl<T: Copy> PerAxis<T> {
    /// Value for the vertical (row) axis.
    pub fn row(self) -> T {
        match self {
            Self::Uniform(v) => v,
            Self::Grid { row, .. } => row,
        }
    }

    /// Value for the horizontal (column) axis.
    pub fn col(self) -> T {
        match self {
            Self::Uniform(v) => v,
            Self::Grid { col, .. } => col,
        }
    }
}

impl<T> From<T> for PerAxis<T> {
    fn from(value: T) -> Self {
        Self::Uniform(value)
    }
}

impl<T> From<[T; 2]> for PerAxis<T> {
    fn from([row, col]: [T; 2]) -> Self {
        Self::Grid { row, col }
    }
}

/// Half-open `[first, last)` slice of one axis of the collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRange {
    pub first: usize,
    /// Exclusive.
    pub last: usize,
}

impl AxisRange {
    pub fn len(&self) -> usize {
        self.last.saturating_sub(self.first)
    }

    pub fn is_empty(&self) -> bool {
        self.first >= self.last
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index < self.last
    }
}

/// The committed render window, shaped by the configured [`Orientation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Window {
    /// A single windowed axis (vertical or horizontal mode).
    Axis(AxisRange),
    /// Independent row and column windows (two-axis mode).
    Grid { rows: AxisRange, cols: AxisRange },
}

impl Window {
    pub fn as_axis(&self) -> Option<AxisRange> {
        match *self {
            Self::Axis(range) => Some(range),
            Self::Grid { .. } => None,
        }
    }

    pub fn as_grid(&self) -> Option<(AxisRange, AxisRange)> {
        match *self {
            Self::Axis(_) => None,
            Self::Grid { rows, cols } => Some((rows, cols)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match *self {
            Self::Axis(range) => range.is_empty(),
            Self::Grid { rows, cols } => rows.is_empty() || cols.is_empty(),
        }
    }
}

/// Raw absolute scroll offsets of the container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub top: u64,
    pub left: u64,
}

/// How the widget should animate a programmatic scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// A scroll command for the widget to apply to the real container.
///
/// The engine is headless and never moves anything itself; commands flow back
/// to the caller as values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub left: u64,
    pub top: u64,
    pub behavior: ScrollBehavior,
}

/// Viewport edge an item should be nudged into view against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollEdge {
    ToStart,
    ToEnd,
}

/// Travel state of one scroll axis.
///
/// `Settled` holds before the first sample and after a reset or programmatic
/// jump; the hysteresis trigger treats it like forward travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Settled,
    Forward,
    Backward,
}

impl ScrollPhase {
    pub fn is_forward(self) -> bool {
        !matches!(self, Self::Backward)
    }
}

/// Measured pixel size of the scrollable container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

/// Fixed content offsets inside the container, in pixels.
///
/// Leading padding shifts where the items start, so scroll offsets are
/// normalized against it before any index math.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentPadding {
    pub top: u32,
    pub left: u32,
    pub right: u32,
    pub bottom: u32,
}

impl ContentPadding {
    /// Total horizontal padding.
    pub fn x(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical padding.
    pub fn y(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Pixel extent the widget should give its spacer element so the container
/// scrolls as if every item were rendered.
///
/// The unwindowed axis is zero and should be left to the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpacerSize {
    pub width: u64,
    pub height: u64,
}

/// Pixel translation that places the rendered slice at the committed window's
/// leading edge inside the spacer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    pub x: u64,
    pub y: u64,
}

/// The committed window paired with a live viewport estimate.
///
/// The viewport estimate tracks where the container actually sits right now,
/// independent of hysteresis, so callers can run edge-proximity checks
/// without forcing a re-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedRange {
    pub window: Window,
    pub viewport: Window,
}

/// What the widget should materialize for the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderPlan {
    /// Windowing is bypassed; render the whole collection.
    Full,
    /// Render the slice the committed window selects.
    Window(Window),
    /// Render synthetic placeholder items in place of data. The count for an
    /// unwindowed axis is zero.
    Loader { rows: usize, cols: usize },
    /// Render no items. Either an overlay loader covers the viewport or
    /// placeholders are disabled.
    Empty,
}

/// Presentation hints attached to a rendered item, derived from its absolute
/// position in the full collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemContext {
    /// Absolute index in the collection.
    pub index: usize,
    /// Collection length at render time.
    pub count: usize,
    pub first: bool,
    pub last: bool,
    pub even: bool,
    pub odd: bool,
}
