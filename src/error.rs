//! Registration and configuration errors.
//!
//! Only configuration calls can fail. Tick processing never reports errors:
//! an entity that cannot be processed is skipped so the polling loop keeps running.

use core::fmt;

/// Error returned by registration and configuration calls.
///
/// A call that returns an error has not changed any manager state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Unknown button/group handle or an invalid timing set.
    BadParameter,
    /// The fixed-capacity button or group storage has no free slot.
    Full,
}

impl fmt::Display for Error {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::BadParameter => f.write_str("bad parameter"),
            Self::Full => f.write_str("registry full"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type for fallible manager calls.
pub type Result<T> = core::result::Result<T, Error>;
