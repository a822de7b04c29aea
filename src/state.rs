//! Persistable windowing state.

use crate::types::{ScrollPosition, Window};

/// A lightweight snapshot of the windowing state.
///
/// Capture with [`state`](crate::VirtualScroller::state) and feed the value
/// to [`restore_state`](crate::VirtualScroller::restore_state) on a fresh
/// instance after a remount; the restored window is re-clamped against
/// whatever geometry the new instance measured.
///
/// With `feature = "serde"` the snapshot serializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollerState {
    /// Committed window at capture time.
    pub window: Window,
    /// Remembered per-axis scroll offsets, content-normalized.
    pub scroll: ScrollPosition,
    /// Loading flag at capture time.
    pub loading: bool,
}
