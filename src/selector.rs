//! Slicing helpers that map committed windows onto caller collections.

use crate::types::{AxisRange, ItemContext};

/// Clamps a committed range against the actual collection length.
///
/// Lazy flows routinely hand the engine windows the data has not caught up
/// with yet, so ranges are clamped at use, never trusted at commit. An
/// inverted range (a hand-built snapshot, say) collapses to empty at `first`.
pub(crate) fn clamp_range(range: AxisRange, len: usize) -> AxisRange {
    let first = range.first.min(len);
    AxisRange {
        first,
        last: range.last.min(len).max(first),
    }
}

pub(crate) fn slice_range<T>(items: &[T], range: AxisRange) -> &[T] {
    let range = clamp_range(range, items.len());
    &items[range.first..range.last]
}

/// Presentation hints for the item at absolute `index` of a `count`-item
/// collection.
pub(crate) fn item_context(index: usize, count: usize) -> ItemContext {
    ItemContext {
        index,
        count,
        first: index == 0,
        last: count > 0 && index == count - 1,
        even: index % 2 == 0,
        odd: index % 2 != 0,
    }
}
