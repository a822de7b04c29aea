//! A headless virtual scrolling engine for windowed list and grid rendering.
//!
//! Large collections should not be rendered whole. From raw scroll-position
//! samples this crate decides which slice of a collection to materialize: a
//! committed `[first, last)` window per axis, moved with direction-aware
//! hysteresis so boundary jitter does not thrash the render. It supports
//! vertical, horizontal, and two-axis grid layouts, a debounce that defers
//! recomputation through a quiet period, lazy data loading driven by window
//! change notifications, and loader placeholder selection while data is on
//! its way.
//!
//! The engine is UI-agnostic and holds no items. A widget layer provides:
//!
//! - the measured container size (and optional content padding),
//! - raw scroll offsets stamped with a caller-supplied clock,
//! - the collection itself at render time, sliced through the window.
//!
//! Programmatic scrolls come back as [`ScrollRequest`] values for the widget
//! to apply, since only the widget can move the real container.
//!
//! ```
//! use virtual_scroller::{
//!     AxisRange, ScrollPosition, ScrollerOptions, ViewportSize, VirtualScroller, Window,
//! };
//!
//! let mut scroller = VirtualScroller::new(ScrollerOptions::new(10_000, 50).with_initial_viewport(
//!     Some(ViewportSize {
//!         width: 300,
//!         height: 500,
//!     }),
//! ));
//! assert_eq!(
//!     scroller.window(),
//!     Window::Axis(AxisRange { first: 0, last: 20 })
//! );
//!
//! scroller.apply_scroll_event(ScrollPosition { top: 2000, left: 0 }, 0);
//! assert_eq!(
//!     scroller.window(),
//!     Window::Axis(AxisRange {
//!         first: 35,
//!         last: 61
//!     })
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod loader;
mod options;
mod scroller;
mod selector;
mod state;
mod types;
mod window;


pub use loader::LoadingPhase;
pub use options::{OnLazyLoadCallback, OnScrollCallback, OnWindowChangeCallback, ScrollerOptions};
pub use scroller::VirtualScroller;
pub use state::ScrollerState;
pub use types::{
    AxisRange, ContentPadding, ItemContext, Orientation, PerAxis, RenderPlan, RenderedRange,
    ScrollBehavior, ScrollEdge, ScrollPhase, ScrollPosition, ScrollRequest, SpacerSize,
    Translation, ViewportSize, Window,
};
