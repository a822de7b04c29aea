//! Deferred commit scheduling and the loading flag.

use crate::types::ScrollPhase;

/// Lifecycle of the loading flag that drives placeholder rendering.
///
/// In non-lazy flows the engine raises and clears it around debounced
/// commits. In lazy flows the data owner controls it through
/// [`set_loading`](crate::VirtualScroller::set_loading).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadingPhase {
    #[default]
    Idle,
    Pending,
}

impl LoadingPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One scroll sample parked until its debounce deadline.
///
/// The axis phases are captured when the sample arrives. Replaying the sample
/// at the deadline must not re-derive direction from scroll memory the sample
/// itself already advanced.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PendingScroll {
    /// Content-normalized offsets.
    pub top: u64,
    pub left: u64,
    pub row_phase: ScrollPhase,
    pub col_phase: ScrollPhase,
    pub deadline_ms: u64,
    /// Whether this sample optimistically raised the loading flag.
    pub raised_loading: bool,
}

/// Single-slot resettable debounce. Arming replaces any parked sample, so
/// only the newest sample inside a quiet period survives to commit.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Debounce {
    pending: Option<PendingScroll>,
}

impl Debounce {
    /// Parks `sample`, returning the sample it displaced.
    pub fn arm(&mut self, sample: PendingScroll) -> Option<PendingScroll> {
        self.pending.replace(sample)
    }

    /// Takes the parked sample once its quiet period has elapsed.
    pub fn take_due(&mut self, now_ms: u64) -> Option<PendingScroll> {
        if self.pending.is_some_and(|p| now_ms >= p.deadline_ms) {
            return self.pending.take();
        }
        None
    }

    pub fn cancel(&mut self) -> Option<PendingScroll> {
        self.pending.take()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Milliseconds until the parked sample is due, if one is parked.
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        self.pending.map(|p| p.deadline_ms.saturating_sub(now_ms))
    }
}
