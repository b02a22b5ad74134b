//! Timing configuration.
//!
//! - `defaults`: Compile-time default thresholds (in ticks, normally milliseconds)
//! - `timing`: Runtime [`Timing`] set used by the state machines

pub mod defaults;
pub mod timing;

// Re-export default thresholds at config level for convenience
pub use defaults::{
    DOUBLE_CLICK_ACTIVE_MS,
    LONG_ACTIVE_MS,
    LONG_PEER_MS,
    SHORT_ACTIVE_MS,
};
pub use timing::Timing;
