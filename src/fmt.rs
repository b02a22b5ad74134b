//! Internal logging macros.
//!
//! With the `defmt` feature enabled these forward to `defmt::trace!`,
//! `defmt::debug!` and `defmt::warn!`. Without it they only borrow their
//! arguments so call sites compile identically and nothing is emitted.
//!
//! # Usage
//!
//! ```ignore
//! debug!("group {} -> {}", id, state);
//! warn!("rejected timing {}", timing);
//! ```

#![macro_use]
#![allow(unused_macros)]

/// Log a message at Trace level.
macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($( & $x ),*);
    }};
}

/// Log a message at Debug level.
macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($( & $x ),*);
    }};
}

/// Log a message at Warn level.
macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        let _ = ($( & $x ),*);
    }};
}
