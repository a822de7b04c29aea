//! Direction-aware hysteresis for the committed window of one axis.

use crate::geometry::AxisGeometry;
use crate::types::{AxisRange, ScrollPhase};

/// Windowing state of one axis: the committed range plus the scroll memory
/// that drives direction detection.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AxisTracker {
    pub range: AxisRange,
    /// Content-normalized offset of the most recent sample.
    pub last_scroll_pos: u64,
    pub phase: ScrollPhase,
}

impl AxisTracker {
    /// Snaps the axis to a fresh range and forgets its scroll history.
    pub fn reset(&mut self, range: AxisRange) {
        self.range = range;
        self.last_scroll_pos = 0;
        self.phase = ScrollPhase::Settled;
    }

    /// Phase a sample at `pos` would put the axis in, without recording it.
    pub fn peek_phase(&self, pos: u64) -> ScrollPhase {
        if self.last_scroll_pos <= pos {
            ScrollPhase::Forward
        } else {
            ScrollPhase::Backward
        }
    }

    /// Records one sample: the remembered offset advances unconditionally,
    /// whether or not the window ends up moving.
    pub fn observe(&mut self, pos: u64) -> ScrollPhase {
        let phase = self.peek_phase(pos);
        self.phase = phase;
        self.last_scroll_pos = pos;
        phase
    }
}

/// Window for an axis re-anchored at `first`.
///
/// Covers initialization (`first == 0`) and programmatic jumps. The trailing
/// margin is two tolerances while the anchor sits inside the leading band and
/// three once it has moved past it.
pub(crate) fn anchored_range(first: usize, geo: &AxisGeometry, count: usize) -> AxisRange {
    let first = first.min(count);
    let spread = if first < geo.tolerance { 2 } else { 3 };
    let last = first
        .saturating_add(geo.capacity)
        .saturating_add(geo.tolerance.saturating_mul(spread));
    AxisRange {
        first,
        last: last.min(count),
    }
}

/// Next committed range for one axis, given the item index under the scroll
/// offset and the travel direction of the sample.
///
/// While `current` stays on the near side of the trigger index the previous
/// `first` is kept, so jitter around a boundary does not thrash the window.
/// Past the trigger, the window re-anchors one tolerance behind `current`
/// going forward and two going backward.
pub(crate) fn next_range(
    prev: AxisRange,
    geo: &AxisGeometry,
    current: usize,
    phase: ScrollPhase,
    count: usize,
) -> AxisRange {
    let tol = geo.tolerance;

    let first = if current <= tol {
        0
    } else if phase.is_forward() {
        let trigger = prev.last.saturating_sub(geo.capacity).saturating_sub(tol);
        if current < trigger {
            prev.first
        } else {
            current.saturating_sub(tol)
        }
    } else {
        let trigger = prev.first.saturating_add(tol).saturating_sub(1);
        if current > trigger {
            prev.first
        } else {
            current.saturating_sub(tol.saturating_mul(2))
        }
    };
    // A sample past the end of the content degrades to an empty tail window.
    let first = first.min(count);

    let mut last = first
        .saturating_add(geo.capacity)
        .saturating_add(tol.saturating_mul(2));
    if current >= tol {
        last = last.saturating_add(tol).saturating_add(1);
    }

    AxisRange {
        first,
        last: last.min(count),
    }
}

/// An update to the committed range only counts when both edges moved.
/// Single-edge drift near the collection boundaries stays invisible.
pub(crate) fn both_edges_moved(prev: AxisRange, next: AxisRange) -> bool {
    next.first != prev.first && next.last != prev.last
}
