//! Internal logging shims.
//!
//! With the `tracing` feature these forward to the `tracing` macros; without
//! it they expand to nothing.

#[cfg(feature = "tracing")]
macro_rules! form_trace {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "form_rail", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! form_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! form_debug {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "form_rail", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! form_debug {
    ($($arg:tt)*) => {};
}
