#[cfg(feature = "tracing")]
macro_rules! vs_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "virtual_scroller", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vs_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! vs_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "virtual_scroller", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vs_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! vs_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "virtual_scroller", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! vs_warn {
    ($($tt:tt)*) => {};
}
