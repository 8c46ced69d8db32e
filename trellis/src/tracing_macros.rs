//! `trace!` and `debug!` for the tree and the serializer.
//!
//! With the `tracing` feature (and always in unit tests) they expand to the
//! `tracing` macros of the same name. Otherwise the arguments are discarded
//! and nothing is compiled in. They are exported only so that `crate::trace`
//! paths resolve; they are not part of the public API.

#[doc(hidden)]
#[cfg(any(test, feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*);
    };
}

#[doc(hidden)]
#[cfg(not(any(test, feature = "tracing")))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[doc(hidden)]
#[cfg(any(test, feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

#[doc(hidden)]
#[cfg(not(any(test, feature = "tracing")))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
