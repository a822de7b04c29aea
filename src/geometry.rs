//! Capacity and tolerance math for one scroll axis.

/// Number of whole items that cover `content` pixels of viewport, rounded up.
///
/// A zero `item_size` falls back to whole-container sizing: the content area
/// counts as a single item instead of dividing by zero. No content means no
/// capacity.
pub(crate) fn items_in_viewport(content: u32, item_size: u32) -> usize {
    if item_size == 0 {
        return if content == 0 { 0 } else { 1 };
    }
    (content as usize).div_ceil(item_size as usize)
}

/// Default overscan margin: half the viewport capacity, rounded up.
pub(crate) fn default_tolerance(capacity: usize) -> usize {
    capacity.div_ceil(2)
}

/// Index of the item under `offset` on an axis of fixed-size items.
///
/// Mirrors the zero-size guard of [`items_in_viewport`]: with no item size,
/// any positive offset lands on index 1.
pub(crate) fn index_at(offset: u64, item_size: u32) -> usize {
    if item_size == 0 {
        return if offset == 0 { 0 } else { 1 };
    }
    (offset / item_size as u64) as usize
}

/// Derived windowing inputs for one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AxisGeometry {
    /// Fixed per-item pixel size along this axis.
    pub item_size: u32,
    /// Items that fit the content area.
    pub capacity: usize,
    /// Overscan margin in items.
    pub tolerance: usize,
}

impl AxisGeometry {
    pub fn compute(content: u32, item_size: u32, tolerance: Option<usize>) -> Self {
        let capacity = items_in_viewport(content, item_size);
        let tolerance = tolerance.unwrap_or_else(|| default_tolerance(capacity));
        Self {
            item_size,
            capacity,
            tolerance,
        }
    }
}
